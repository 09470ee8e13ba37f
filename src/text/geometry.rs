//! Mapping between buffer indices and on-screen `(row, x)` positions.
//!
//! All functions work on the output of [`wrap_text`] for the same buffer
//! snapshot and the same measurement callback. Positions skipped by a soft
//! wrap (trimmed whitespace) resolve to the end of the row before the gap.

use crate::text::wrap::{WrappedLine, wrap_text};
use crate::unicode::{FontSpec, Measure};

/// Wrapping parameters shared by the geometry helpers.
pub struct WrapLayout<'a, M: ?Sized> {
    pub max_width: f32,
    pub font: FontSpec<'a>,
    pub measure: &'a M,
}

impl<M: ?Sized> Clone for WrapLayout<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for WrapLayout<'_, M> {}

impl<'a, M: Measure + ?Sized> WrapLayout<'a, M> {
    #[must_use]
    pub fn new(max_width: f32, font: FontSpec<'a>, measure: &'a M) -> Self {
        Self {
            max_width,
            font,
            measure,
        }
    }

    /// Wrap `text` with this layout.
    #[must_use]
    pub fn wrap(&self, text: &str) -> Vec<WrappedLine> {
        wrap_text(text, self.max_width, self.font, self.measure)
    }
}

/// Row that displays the cursor at `index`.
///
/// An index at a row's end belongs to that row only when the next row does
/// not start there (hard break or trimmed gap); otherwise it is the start of
/// the next row. Indices past the last row resolve to the last row.
#[must_use]
pub fn row_for_index(lines: &[WrappedLine], index: usize) -> usize {
    lines
        .windows(2)
        .position(|pair| index < pair[1].start)
        .unwrap_or_else(|| lines.len().saturating_sub(1))
}

/// Resolve `index` to `(row, x)` where `x` is the measured width of the row
/// prefix before the cursor.
#[must_use]
pub fn index_to_row_x<M: Measure + ?Sized>(
    lines: &[WrappedLine],
    index: usize,
    font: FontSpec<'_>,
    measure: &M,
) -> (usize, f32) {
    if lines.is_empty() {
        return (0, 0.0);
    }
    let row = row_for_index(lines, index);
    let line = &lines[row];
    let offset = index.clamp(line.start, line.end) - line.start;
    let prefix: String = line.text.chars().take(offset).collect();
    (row, measure.measure(&prefix, font))
}

/// Resolve a pixel position on `row` to the nearest character boundary.
///
/// Boundary `i` is chosen when `x` is at or before the midpoint between the
/// offsets of `i` and `i + 1`, so clicks snap to the closest edge instead of
/// always rounding down. Rows past the end clamp to the last row.
#[must_use]
pub fn row_x_to_index<M: Measure + ?Sized>(
    lines: &[WrappedLine],
    row: usize,
    x: f32,
    font: FontSpec<'_>,
    measure: &M,
) -> usize {
    let row = row.min(lines.len().saturating_sub(1));
    let Some(line) = lines.get(row) else {
        return 0;
    };

    let mut prefix = String::with_capacity(line.text.len());
    let mut left = measure.measure(&prefix, font);
    for (i, ch) in line.text.chars().enumerate() {
        prefix.push(ch);
        let right = measure.measure(&prefix, font);
        if (left + right) / 2.0 >= x {
            return line.start + i;
        }
        left = right;
    }
    // A forced break shares its end with the next row's start
    match lines.get(row + 1) {
        Some(next) if next.start == line.end && line.end > line.start => line.end - 1,
        _ => line.end,
    }
}

/// Move the cursor `delta_rows` display rows up (negative) or down.
///
/// Vertical motion keeps the cursor's pixel x. Moving up from the first
/// row goes to the start of the text; moving down from the last row goes to
/// the end.
#[must_use]
pub fn move_cursor_vertical<M: Measure + ?Sized>(
    text: &str,
    index: usize,
    delta_rows: isize,
    max_width: f32,
    font: FontSpec<'_>,
    measure: &M,
) -> usize {
    move_cursor_vertical_with_x(text, index, delta_rows, None, max_width, font, measure).0
}

/// [`move_cursor_vertical`] with a sticky column.
///
/// When `preferred_x` is given it replaces the cursor's current x, so a run
/// of vertical moves through short rows returns to the original column.
/// Returns the new index and the x the move aimed for.
#[must_use]
pub fn move_cursor_vertical_with_x<M: Measure + ?Sized>(
    text: &str,
    index: usize,
    delta_rows: isize,
    preferred_x: Option<f32>,
    max_width: f32,
    font: FontSpec<'_>,
    measure: &M,
) -> (usize, f32) {
    let len = text.chars().count();
    let index = index.min(len);
    let lines = wrap_text(text, max_width, font, measure);
    let (row, current_x) = index_to_row_x(&lines, index, font, measure);
    let x = preferred_x.unwrap_or(current_x);

    let last_row = lines.len().saturating_sub(1) as isize;
    let target_row = (row as isize).saturating_add(delta_rows).clamp(0, last_row) as usize;

    if target_row == row {
        let snapped = match delta_rows {
            d if d < 0 => 0,
            d if d > 0 => len,
            _ => index,
        };
        return (snapped, x);
    }

    (row_x_to_index(&lines, target_row, x, font, measure), x)
}
