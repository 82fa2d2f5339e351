//! `#line` marker recognition and logical line tracking
//!
//! C-family preprocessors annotate their output with markers of the form
//! `#line N "file"`, meaning "the next physical line corresponds to line N
//! of file".  This module provides:
//! - [`LineDirective`]: one parsed marker (declared line number + filename)
//! - [`DirectiveTracker`]: the attribution state threaded through one scan
//!   of the preprocessed buffer
//! - [`DirectiveError`]: the failure type for markers that cannot be read
//!
//! Between markers the preprocessor emits physical lines one-for-one with
//! the lines of whatever file it is currently expanding, so the tracker
//! free-runs a counter across content lines and re-anchors it whenever a
//! marker appears.

use std::fmt;

/// The marker prefix: directive keyword followed by exactly one space.
const MARKER: &str = "#line ";

/// Error raised for a `#line` marker whose number or filename cannot be read.
///
/// Preprocessor output is machine-generated, so a broken marker almost
/// always means the wrong file was fed in; the merge stops rather than
/// guessing at attribution.
#[derive(Debug)]
pub struct DirectiveError {
    pub message: String,
    /// 1-based physical line in the preprocessed buffer.
    pub line: usize,
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed #line directive at preprocessed line {}: {}",
            self.line, self.message
        )
    }
}

impl std::error::Error for DirectiveError {}

/// A parsed `#line N "file"` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDirective<'a> {
    /// Declared 1-based source line number of the next physical line.
    pub line_number: u32,
    /// Declared source filename, without the surrounding quotes.
    pub file_name: &'a str,
}

impl<'a> LineDirective<'a> {
    /// Recognize a physical line as a `#line` marker.
    ///
    /// Returns `Ok(None)` for ordinary content lines.  A line is a marker
    /// iff its first six bytes are exactly `#line ` — no other directive
    /// form is recognized.  `physical_line` is 1-based and is only used for
    /// diagnostics.
    pub fn parse(
        line: &'a str,
        physical_line: usize,
    ) -> Result<Option<Self>, DirectiveError> {
        let Some(rest) = line.strip_prefix(MARKER) else {
            return Ok(None);
        };

        let malformed = |message: &str| DirectiveError {
            message: message.to_string(),
            line: physical_line,
        };

        let digits = rest.trim_start_matches(' ');
        let digit_len = digits
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digit_len == 0 {
            return Err(malformed("expected a decimal line number"));
        }
        let line_number: u32 = digits[..digit_len]
            .parse()
            .map_err(|_| malformed("line number out of range"))?;

        let Some(open) = rest.find('"') else {
            return Err(malformed("expected a double-quoted filename"));
        };
        let after_quote = &rest[open + 1..];
        let Some(close) = after_quote.find('"') else {
            return Err(malformed("unterminated filename"));
        };

        Ok(Some(LineDirective {
            line_number,
            file_name: &after_quote[..close],
        }))
    }
}

/// Attribution state for one scan over a preprocessed buffer.
///
/// Holds the logical line the next physical line corresponds to and whether
/// that line belongs to the file being merged (as opposed to an included
/// header the preprocessor pulled in).
#[derive(Debug)]
pub struct DirectiveTracker {
    /// Signed so that `#line 0` (counter −1) stays representable.
    current: i64,
    in_target: bool,
}

impl DirectiveTracker {
    /// Before the first marker, physical lines count from zero and are
    /// assumed to belong to the target file.
    pub fn new() -> Self {
        DirectiveTracker {
            current: 0,
            in_target: true,
        }
    }

    /// Re-anchor on a marker: the next physical line is the declared line,
    /// and attribution turns on iff the declared filename equals the target
    /// name exactly.  The marker itself contributes no content.
    pub fn apply(&mut self, directive: &LineDirective<'_>, target_name: &str) {
        self.current = i64::from(directive.line_number) - 1;
        self.in_target = directive.file_name == target_name;
    }

    /// The logical slot the current physical line should be attributed to,
    /// or `None` if it belongs to another file or falls outside
    /// `[0, line_count)`.
    pub fn attribution(&self, line_count: usize) -> Option<usize> {
        if !self.in_target {
            return None;
        }
        usize::try_from(self.current)
            .ok()
            .filter(|&slot| slot < line_count)
    }

    /// Step past one content line.  Called for every non-marker line,
    /// attributed or not, mirroring how the preprocessor numbers its own
    /// output.
    pub fn advance(&mut self) {
        self.current += 1;
    }
}

impl Default for DirectiveTracker {
    fn default() -> Self {
        Self::new()
    }
}
