//! Line-by-line reconstruction of the merged output

use super::slots::ExpandedLines;
use crate::lines::{is_comment_line, leading_whitespace};

/// Produce the merged text: one output line per logical line, each with a
/// trailing newline.
pub fn render(original: &[&str], expanded: &ExpandedLines<'_>) -> String {
    let mut out = String::new();
    for (orig, slot) in original.iter().zip(expanded.iter()) {
        render_line(orig, slot.as_str(), &mut out);
        out.push('\n');
    }
    out
}

/// Emit one merged line (without its newline) into `out`.
fn render_line(orig: &str, pre: &str, out: &mut String) {
    let pre_indent = leading_whitespace(pre);
    let orig_indent = leading_whitespace(orig);
    let pre_body = &pre[pre_indent..];

    if pre_body.is_empty() {
        // Nothing survived preprocessing for this line.  Restore the
        // original verbatim if it is a comment; otherwise the line stays
        // blank rather than carrying stray padding.
        if is_comment_line(&orig[orig_indent..]) {
            out.push_str(orig);
        }
        return;
    }

    if orig_indent > pre_indent {
        // Re-indent the expanded code to where it sat in the original.
        for _ in 0..orig_indent - pre_indent {
            out.push(' ');
        }
        out.push_str(pre_body);
    } else {
        out.push_str(pre);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(orig: &str, pre: &str) -> String {
        let mut out = String::new();
        render_line(orig, pre, &mut out);
        out
    }

    #[test]
    fn test_expanded_code_replaces_original() {
        assert_eq!(line("int x = MAC;", "int x = 5;"), "int x = 5;");
    }

    #[test]
    fn test_comment_restored_when_expansion_is_empty() {
        assert_eq!(line("  // note", ""), "  // note");
        assert_eq!(line(" * body", "   "), " * body");
    }

    #[test]
    fn test_non_comment_line_stays_blank() {
        assert_eq!(line("    int y;", ""), "");
        assert_eq!(line("", ""), "");
    }

    #[test]
    fn test_reindent_to_original_depth() {
        assert_eq!(line("    int y;", "int y = 1;"), "    int y = 1;");
        assert_eq!(line("      f();", "  f();"), "    f();");
    }

    #[test]
    fn test_deeper_expansion_kept_as_is() {
        assert_eq!(line("f();", "    f();"), "    f();");
        assert_eq!(line("  g();", "  g();"), "  g();");
    }
}
