//! Physical line handling for source buffers
//!
//! This module splits raw text buffers into line slices and provides the
//! lexical helpers the merge engine needs:
//! - [`split_lines`]: buffer → ordered line slices (zero-copy)
//! - [`leading_whitespace`]: indent measurement in bytes
//! - [`is_comment_line`]: comment-opener recognition on left-trimmed text
//!
//! Lines are borrowed slices into the backing buffer, so splitting both a
//! large original and its even larger preprocessed expansion allocates only
//! the two slice tables.

/// Split a buffer into physical line slices.
///
/// Produces one slice per newline byte plus one for whatever follows the
/// last newline, so the slice count always equals the newline count plus
/// one.  A buffer that ends with a newline therefore yields a final empty
/// slice, and an empty buffer yields exactly one empty slice.
pub fn split_lines(buf: &str) -> Vec<&str> {
    buf.split('\n').collect()
}

/// Count the leading ASCII whitespace bytes of a line.
pub fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| b.is_ascii_whitespace()).count()
}

/// Check whether a left-trimmed line opens or continues a comment.
///
/// Recognized patterns: `/*`, `*/`, `//`, `* ` (a block-comment body line),
/// `*. ` (a hanging-indent body line), and a bare `*` that ends the line
/// (the empty middle line of a block comment).
pub fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("/*")
        || trimmed.starts_with("* ")
        || trimmed == "*"
        || trimmed.starts_with("*. ")
        || trimmed.starts_with("*/")
        || trimmed.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_counts_newlines_plus_one() {
        assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn test_split_is_zero_copy() {
        let buf = String::from("one\ntwo");
        let lines = split_lines(&buf);
        assert_eq!(lines[1].as_ptr(), buf[4..].as_ptr());
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace(""), 0);
        assert_eq!(leading_whitespace("x"), 0);
        assert_eq!(leading_whitespace("    x"), 4);
        assert_eq!(leading_whitespace("\t x"), 2);
        assert_eq!(leading_whitespace("   "), 3);
    }

    #[test]
    fn test_comment_openers() {
        assert!(is_comment_line("/* start"));
        assert!(is_comment_line("* body"));
        assert!(is_comment_line("*"));
        assert!(is_comment_line("*. hanging"));
        assert!(is_comment_line("*/"));
        assert!(is_comment_line("// line comment"));
    }

    #[test]
    fn test_non_comment_lines() {
        assert!(!is_comment_line("int x = 5;"));
        assert!(!is_comment_line("*p = 0;"));
        assert!(!is_comment_line("*."));
        assert!(!is_comment_line(""));
    }
}
