//! Code-point indexed content storage using the ropey crate.

use ropey::Rope;
use std::ops::Range;

/// Wrapper around `ropey::Rope` with clamped, code-point indexed operations.
///
/// Cloning is cheap: ropes share structure, so undo snapshots hold a clone
/// rather than a flat copy of the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create an empty rope.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of code points.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Copy a code-point range out as a `String`. The range is clamped.
    #[must_use]
    pub fn slice_to_string(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.rope.slice(start..end).to_string()
    }

    /// Insert text at a code-point position; positions past the end append.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let idx = char_idx.min(self.len_chars());
        self.rope.insert(idx, text);
    }

    /// Remove a code-point range. The range is clamped; empty ranges are ignored.
    pub fn remove(&mut self, range: Range<usize>) {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        if start < end {
            self.rope.remove(start..end);
        }
    }

    /// Replace the entire contents.
    pub fn replace(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    /// Check whether any `\n` or `\r` is present.
    #[must_use]
    pub fn contains_line_break(&self) -> bool {
        self.rope.chars().any(|c| c == '\n' || c == '\r')
    }

    /// Get access to the underlying rope.
    #[must_use]
    pub fn inner(&self) -> &Rope {
        &self.rope
    }
}
