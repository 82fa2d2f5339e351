//! Per-line accumulation slots for expanded content
//!
//! Each logical line of the original source gets one slot.  Most lines are
//! covered by exactly one physical preprocessed line, which is stored as a
//! borrow into the preprocessed buffer; a macro that expands across several
//! physical lines promotes its slot to an owned concatenation.

/// Content accumulated for one logical source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreLine<'a> {
    /// The preprocessor emitted nothing for this line.
    Empty,
    /// A single physical line, borrowed from the preprocessed buffer.
    Borrowed(&'a str),
    /// Two or more physical lines, concatenated in encounter order.
    Owned(String),
}

impl PreLine<'_> {
    /// The slot's content; empty slots read as the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            PreLine::Empty => "",
            PreLine::Borrowed(s) => s,
            PreLine::Owned(s) => s,
        }
    }
}

/// The preprocessed content attributed to each logical line of the original.
///
/// Slot *i* holds exactly what the preprocessor emitted for original source
/// line *i*; the table length is fixed at the original's line count.
#[derive(Debug)]
pub struct ExpandedLines<'a> {
    slots: Vec<PreLine<'a>>,
}

impl<'a> ExpandedLines<'a> {
    /// A table of `line_count` empty slots.
    pub fn new(line_count: usize) -> Self {
        ExpandedLines {
            slots: vec![PreLine::Empty; line_count],
        }
    }

    /// Attribute one physical line's content to logical line `index`.
    ///
    /// The first assignment borrows the content without copying; any later
    /// assignment to the same slot appends with no separator, preserving
    /// encounter order.  Callers guarantee `index` is in range.
    pub fn assign(&mut self, index: usize, content: &'a str) {
        let slot = &mut self.slots[index];
        match slot {
            PreLine::Empty => *slot = PreLine::Borrowed(content),
            PreLine::Borrowed(prev) => {
                let mut buf = String::with_capacity(prev.len() + content.len());
                buf.push_str(prev);
                buf.push_str(content);
                *slot = PreLine::Owned(buf);
            }
            PreLine::Owned(buf) => buf.push_str(content),
        }
    }

    pub fn get(&self, index: usize) -> &PreLine<'a> {
        &self.slots[index]
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PreLine<'a>> {
        self.slots.iter()
    }
}
