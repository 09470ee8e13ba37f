//! Soft line wrapping for multi-line display.
//!
//! [`wrap_text`] partitions a buffer snapshot into display rows. `\n` is a
//! hard break; other rows end at the last word boundary that fits, or
//! mid-word when a single token is wider than the available width.
//! Whitespace at a soft-wrap point is trimmed and does not belong to any
//! row, so `lines[i].end <= lines[i + 1].start` with equality except after
//! a trimmed gap.

use crate::text::boundary::is_whitespace;
use crate::unicode::{FontSpec, Measure};

/// One display row: `text` is the code-point range `[start, end)` of the
/// snapshot that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrappedLine {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl WrappedLine {
    /// Number of code points in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Wrap `text` into rows no wider than `max_width` where possible.
///
/// A `max_width` that is zero, negative or not finite disables soft
/// wrapping; only hard breaks apply. The result always has at least one
/// (possibly empty) row, and a trailing `\n` yields a final empty row so a
/// cursor after it has somewhere to land.
#[must_use]
pub fn wrap_text<M: Measure + ?Sized>(
    text: &str,
    max_width: f32,
    font: FontSpec<'_>,
    measure: &M,
) -> Vec<WrappedLine> {
    let chars: Vec<char> = text.chars().collect();
    let soft_wrap = max_width.is_finite() && max_width > 0.0;

    let mut lines = Vec::new();
    let mut line_start = 0usize;
    // Index just past the last word on the current row (start of a whitespace run)
    let mut last_word_end: Option<usize> = None;
    let mut candidate = String::new();
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\n' {
            lines.push(make_line(&chars, line_start, i));
            i += 1;
            line_start = i;
            last_word_end = None;
            candidate.clear();
            continue;
        }

        if is_whitespace(ch) && i > line_start && !is_whitespace(chars[i - 1]) {
            last_word_end = Some(i);
        }

        candidate.push(ch);
        if soft_wrap && i > line_start && measure.measure(&candidate, font) > max_width {
            let break_at = match last_word_end {
                Some(end) if end > line_start => end,
                _ => i,
            };
            lines.push(make_line(&chars, line_start, break_at));

            let mut next = break_at;
            while next < chars.len() && chars[next] != '\n' && is_whitespace(chars[next]) {
                next += 1;
            }
            // A hard break right after the wrap point would only add an empty row
            if next > break_at && next < chars.len() && chars[next] == '\n' {
                next += 1;
            }

            line_start = next;
            i = next;
            last_word_end = None;
            candidate.clear();
            continue;
        }

        i += 1;
    }

    lines.push(make_line(&chars, line_start, chars.len()));
    lines
}

fn make_line(chars: &[char], start: usize, end: usize) -> WrappedLine {
    WrappedLine {
        text: chars[start..end].iter().collect(),
        start,
        end,
    }
}
