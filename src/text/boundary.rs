//! Word and line boundary scanning.
//!
//! Pure functions over anything that can hand out code points by index.
//! A word is a maximal run of non-whitespace code points; a line ends at
//! `\n` or the buffer boundary. Positions past the end are clamped.

use ropey::{Rope, RopeSlice};

/// Random access to code points by index.
pub trait CharSource {
    /// Number of code points.
    fn char_len(&self) -> usize;
    /// Code point at `idx`; callers guarantee `idx < char_len()`.
    fn char_at(&self, idx: usize) -> char;
}

impl CharSource for [char] {
    fn char_len(&self) -> usize {
        self.len()
    }

    fn char_at(&self, idx: usize) -> char {
        self[idx]
    }
}

impl CharSource for Vec<char> {
    fn char_len(&self) -> usize {
        self.len()
    }

    fn char_at(&self, idx: usize) -> char {
        self[idx]
    }
}

impl CharSource for Rope {
    fn char_len(&self) -> usize {
        self.len_chars()
    }

    fn char_at(&self, idx: usize) -> char {
        self.char(idx)
    }
}

impl CharSource for RopeSlice<'_> {
    fn char_len(&self) -> usize {
        self.len_chars()
    }

    fn char_at(&self, idx: usize) -> char {
        self.char(idx)
    }
}

/// Whitespace classification used for word boundaries.
#[inline]
#[must_use]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Start of the word before `pos`: skip whitespace backward, then the
/// preceding run of non-whitespace.
#[must_use]
pub fn find_word_start<S: CharSource + ?Sized>(content: &S, pos: usize) -> usize {
    let mut idx = pos.min(content.char_len());
    while idx > 0 && is_whitespace(content.char_at(idx - 1)) {
        idx -= 1;
    }
    while idx > 0 && !is_whitespace(content.char_at(idx - 1)) {
        idx -= 1;
    }
    idx
}

/// End of the word after `pos`: skip whitespace forward, then the
/// following run of non-whitespace.
#[must_use]
pub fn find_word_end<S: CharSource + ?Sized>(content: &S, pos: usize) -> usize {
    let len = content.char_len();
    let mut idx = pos.min(len);
    while idx < len && is_whitespace(content.char_at(idx)) {
        idx += 1;
    }
    while idx < len && !is_whitespace(content.char_at(idx)) {
        idx += 1;
    }
    idx
}

/// Range of the word a click at `pos` should select.
///
/// Whitespace at `pos` is skipped forward first, so a click in the gap
/// between words selects the following word. At the end of the text the
/// last word is selected.
#[must_use]
pub fn word_range_at<S: CharSource + ?Sized>(content: &S, pos: usize) -> (usize, usize) {
    let end = find_word_end(content, pos);
    let start = find_word_start(content, end);
    (start, end)
}

/// Start of the line containing `pos` (index just after the previous `\n`).
#[must_use]
pub fn find_line_start<S: CharSource + ?Sized>(content: &S, pos: usize) -> usize {
    let mut idx = pos.min(content.char_len());
    while idx > 0 && content.char_at(idx - 1) != '\n' {
        idx -= 1;
    }
    idx
}

/// End of the line containing `pos` (index of the next `\n`, or the length).
#[must_use]
pub fn find_line_end<S: CharSource + ?Sized>(content: &S, pos: usize) -> usize {
    let len = content.char_len();
    let mut idx = pos.min(len);
    while idx < len && content.char_at(idx) != '\n' {
        idx += 1;
    }
    idx
}
