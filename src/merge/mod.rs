//! Reconciliation of preprocessor output with its original source
//!
//! The merge runs in three linear passes:
//! 1. Both buffers are split into physical line slices ([`crate::lines`]).
//! 2. [`collect_expanded`] walks the preprocessed lines, following `#line`
//!    markers and attributing target-file content to logical line slots.
//! 3. [`engine::render`] emits one output line per original line, preferring
//!    expanded content and falling back to the original for comment lines.
//!
//! All state is local to one [`merge`] call; the inputs are never mutated.

mod engine;
mod slots;

pub use slots::{ExpandedLines, PreLine};

use crate::directive::{DirectiveError, DirectiveTracker, LineDirective};
use crate::lines::split_lines;

/// Merge a preprocessed buffer with the original source it came from.
///
/// `source_name` must be spelled exactly as the preprocessor wrote it into
/// its `#line` markers for the file being merged; content attributed to any
/// other filename (included headers, mostly) is discarded.
///
/// The result has one line per logical line of `original`, each terminated
/// with a newline.  The only failure is a `#line` marker that cannot be
/// parsed.
pub fn merge(
    original: &str,
    preprocessed: &str,
    source_name: &str,
) -> Result<String, DirectiveError> {
    let original_lines = split_lines(original);
    let expanded = collect_expanded(preprocessed, source_name, original_lines.len())?;
    Ok(engine::render(&original_lines, &expanded))
}

/// Attribute each physical preprocessed line to a logical original line.
///
/// `line_count` is the original's logical line count and bounds the slot
/// table; attributed content outside `[0, line_count)` is dropped.
pub fn collect_expanded<'a>(
    preprocessed: &'a str,
    source_name: &str,
    line_count: usize,
) -> Result<ExpandedLines<'a>, DirectiveError> {
    let mut physical = split_lines(preprocessed);
    // A trailing newline terminates the last line; it does not open a
    // phantom empty line after it.
    if preprocessed.ends_with('\n') {
        physical.pop();
    }

    let mut expanded = ExpandedLines::new(line_count);
    let mut tracker = DirectiveTracker::new();

    for (index, line) in physical.into_iter().enumerate() {
        if let Some(directive) = LineDirective::parse(line, index + 1)? {
            tracker.apply(&directive, source_name);
            continue;
        }
        if let Some(slot) = tracker.attribution(line_count) {
            expanded.assign(slot, line);
        }
        tracker.advance();
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribution_follows_markers() {
        let pre = "#line 2 \"src.t\"\nint x = 5;\n";
        let expanded = collect_expanded(pre, "src.t", 3).unwrap();
        assert_eq!(*expanded.get(0), PreLine::Empty);
        assert_eq!(*expanded.get(1), PreLine::Borrowed("int x = 5;"));
        assert_eq!(*expanded.get(2), PreLine::Empty);
    }

    #[test]
    fn test_header_content_is_discarded() {
        let pre = "#line 1 \"header.h\"\nint h;\n#line 1 \"src.t\"\nint s;\n";
        let expanded = collect_expanded(pre, "src.t", 2).unwrap();
        assert_eq!(*expanded.get(0), PreLine::Borrowed("int s;"));
        assert_eq!(*expanded.get(1), PreLine::Empty);
    }

    #[test]
    fn test_counter_free_runs_between_markers() {
        let pre = "#line 1 \"src.t\"\na;\nb;\nc;\n";
        let expanded = collect_expanded(pre, "src.t", 3).unwrap();
        assert_eq!(expanded.get(0).as_str(), "a;");
        assert_eq!(expanded.get(1).as_str(), "b;");
        assert_eq!(expanded.get(2).as_str(), "c;");
    }

    #[test]
    fn test_split_expansion_concatenates() {
        // Two physical lines re-anchored onto the same logical line.
        let pre = "#line 1 \"src.t\"\nint x = \n#line 1 \"src.t\"\n5;\n";
        let expanded = collect_expanded(pre, "src.t", 1).unwrap();
        assert_eq!(*expanded.get(0), PreLine::Owned("int x = 5;".to_string()));
    }

    #[test]
    fn test_malformed_marker_reports_physical_line() {
        let pre = "#line 1 \"src.t\"\nok;\n#line ? \"src.t\"\n";
        let err = collect_expanded(pre, "src.t", 2).unwrap_err();
        assert_eq!(err.line, 3);
    }
}
