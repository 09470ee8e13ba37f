//! Editable text buffer with cursor, selection and undo/redo.
//!
//! This module provides [`EditBuffer`], the single owner of the content,
//! the cursor and the selection anchor. Every mutation goes through the
//! buffer's [`InputPolicy`] first and records an undo [`Snapshot`] before it
//! splices.
//!
//! # Examples
//!
//! ```
//! use textedit::EditBuffer;
//!
//! let mut buf = EditBuffer::with_text("Hello World");
//!
//! // Select "World" and replace it
//! buf.set_selection(6, 11);
//! buf.insert("Rust");
//! assert_eq!(buf.text(), "Hello Rust");
//!
//! // Undo restores the replaced text and selection
//! buf.undo();
//! assert_eq!(buf.text(), "Hello World");
//! assert_eq!(buf.selection(), (6, 11));
//! ```

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::options::BufferOptions;
use crate::text::blink::CursorBlink;
use crate::text::boundary::{
    find_line_end, find_line_start, find_word_end, find_word_start, word_range_at,
};
use crate::text::geometry::{
    WrapLayout, index_to_row_x, move_cursor_vertical_with_x, row_x_to_index,
};
use crate::text::history::{History, Snapshot};
use crate::text::policy::{CharFilter, InputPolicy, PolicyFlags, Validator};
use crate::text::rope::RopeWrapper;
use crate::unicode::Measure;

/// Editable text buffer.
///
/// Indices are code-point offsets in `[0, len_chars()]`. The cursor is the
/// moving end of the selection and the anchor the fixed end; they are equal
/// when nothing is selected.
///
/// # Editing
///
/// [`insert`](Self::insert) replaces the selection, [`delete`](Self::delete)
/// and [`delete_word`](Self::delete_word) remove the selection if there is
/// one and otherwise a counted or word-sized range next to the cursor.
/// Edits refused by the policy (read-only, everything filtered out) are
/// no-ops and leave the history untouched.
///
/// # Motion
///
/// Every motion takes an `extend` flag. Without it an existing selection is
/// collapsed first, toward its start when moving backward and its end when
/// moving forward.
#[derive(Debug, Default)]
pub struct EditBuffer {
    content: RopeWrapper,
    cursor: usize,
    anchor: usize,
    policy: InputPolicy,
    history: History,
    blink: CursorBlink,
    /// Sticky column for consecutive vertical moves.
    preferred_x: Option<f32>,
    revision: u64,
}

impl EditBuffer {
    /// Create an empty single-line buffer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with default options and initial text.
    ///
    /// Default buffers are single-line, so newlines in `text` are dropped.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut buf = Self::new();
        buf.set_text(text);
        buf
    }

    /// Create an empty buffer configured by `options`.
    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        let mut flags = PolicyFlags::empty();
        flags.set(PolicyFlags::MULTILINE, options.multiline);
        flags.set(PolicyFlags::READ_ONLY, options.read_only);
        flags.set(PolicyFlags::PASSWORD, options.password);

        let mut policy = InputPolicy::new();
        policy.set_flag(flags, true);
        policy.set_mask_char(options.mask_char);
        policy.set_max_length(options.max_length);
        policy.set_placeholder(options.placeholder);

        Self {
            policy,
            history: History::with_max_depth(options.max_undo),
            blink: CursorBlink::new(options.blink_interval),
            ..Self::default()
        }
    }

    // ---- content -------------------------------------------------------

    /// Full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.content.to_string()
    }

    /// Replace the whole content.
    ///
    /// This is a load, not an edit: it bypasses the character filter, the
    /// length cap and read-only mode, and clears the undo history. Newlines
    /// are still stripped from single-line buffers. Cursor and anchor are
    /// clamped into the new content. Returns `false` if the content did not
    /// change.
    pub fn set_text(&mut self, text: &str) -> bool {
        let text = if self.policy.is_multiline() {
            text.to_string()
        } else {
            strip_line_breaks(text)
        };
        if self.content.to_string() == text {
            return false;
        }
        self.content.replace(&text);
        self.clamp_selection();
        self.history.clear();
        self.content_changed();
        true
    }

    /// Text to render: the content, or the mask for password buffers.
    ///
    /// Never edit based on this value.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.policy.is_password() {
            self.policy.mask(self.len_chars())
        } else {
            self.text()
        }
    }

    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.content.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Counter bumped on every content change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ---- cursor and selection ------------------------------------------

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Selection as an ordered `(start, end)` pair.
    #[must_use]
    pub fn selection(&self) -> (usize, usize) {
        (self.cursor.min(self.anchor), self.cursor.max(self.anchor))
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.cursor != self.anchor
    }

    #[must_use]
    pub fn selected_text(&self) -> String {
        let (start, end) = self.selection();
        self.content.slice_to_string(start..end)
    }

    /// Collapse the selection onto the cursor.
    pub fn clear_selection(&mut self) {
        self.set_selection(self.cursor, self.cursor);
    }

    /// Place the cursor at `pos` with nothing selected.
    pub fn set_cursor(&mut self, pos: usize) {
        self.set_selection(pos, pos);
    }

    /// Set anchor and cursor directly; each is clamped independently.
    pub fn set_selection(&mut self, anchor: usize, cursor: usize) {
        let len = self.len_chars();
        self.anchor = anchor.min(len);
        self.cursor = cursor.min(len);
        self.cursor_moved();
    }

    pub fn select_all(&mut self) {
        self.set_selection(0, self.len_chars());
    }

    /// Select the word at `pos`; whitespace at `pos` selects the next word.
    pub fn select_word_at(&mut self, pos: usize) {
        let (start, end) = word_range_at(self.content.inner(), pos);
        self.set_selection(start, end);
    }

    /// Select the line containing `pos`, without its newline.
    ///
    /// Single-line buffers select everything.
    pub fn select_line(&mut self, pos: usize) {
        if self.policy.is_multiline() {
            let rope = self.content.inner();
            let start = find_line_start(rope, pos);
            let end = find_line_end(rope, pos);
            self.set_selection(start, end);
        } else {
            self.select_all();
        }
    }

    // ---- editing -------------------------------------------------------

    /// Replace the selection (if any) with `text` and place the cursor after it.
    ///
    /// `text` is sanitized by the input policy and truncated to the
    /// remaining capacity when a maximum length is set. Returns `false` when
    /// nothing changed.
    pub fn insert(&mut self, text: &str) -> bool {
        if self.refuse_read_only("insert") {
            return false;
        }
        let (start, end) = self.selection();
        let sanitized = self.policy.sanitize(text);
        let (text, truncated) =
            self.policy
                .truncate_to_capacity(sanitized, self.len_chars(), end - start);
        if truncated {
            tracing::debug!(
                max_length = self.policy.max_length(),
                kept = text.chars().count(),
                "insert truncated to max length"
            );
        }
        if text.is_empty() && start == end {
            return false;
        }
        self.splice(start..end, &text);
        true
    }

    /// Delete the selection, or `count` code points after (`count > 0`) or
    /// before (`count < 0`) the cursor.
    pub fn delete(&mut self, count: isize) -> bool {
        if self.refuse_read_only("delete") {
            return false;
        }
        let range = if self.has_selection() {
            let (start, end) = self.selection();
            start..end
        } else if count < 0 {
            self.cursor.saturating_sub(count.unsigned_abs())..self.cursor
        } else {
            self.cursor..offset_index(self.cursor, count, self.len_chars())
        };
        self.delete_range(range)
    }

    /// Delete the selection, or up to the next word end / previous word start.
    pub fn delete_word(&mut self, forward: bool) -> bool {
        if self.refuse_read_only("delete_word") {
            return false;
        }
        let range = if self.has_selection() {
            let (start, end) = self.selection();
            start..end
        } else if forward {
            self.cursor..find_word_end(self.content.inner(), self.cursor)
        } else {
            find_word_start(self.content.inner(), self.cursor)..self.cursor
        };
        self.delete_range(range)
    }

    fn delete_range(&mut self, range: Range<usize>) -> bool {
        if range.is_empty() {
            return false;
        }
        self.splice(range, "");
        true
    }

    fn splice(&mut self, range: Range<usize>, text: &str) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
        self.content.remove(range.clone());
        self.content.insert(range.start, text);
        let cursor = range.start + text.chars().count();
        self.cursor = cursor;
        self.anchor = cursor;
        self.content_changed();
    }

    // ---- motion --------------------------------------------------------

    /// Move the cursor by `delta` code points.
    ///
    /// Without `extend`, an existing selection collapses to its start
    /// (`delta < 0`) or end (`delta > 0`) instead of moving.
    pub fn move_cursor(&mut self, delta: isize, extend: bool) {
        if !extend && self.has_selection() {
            let (start, end) = self.selection();
            let target = match delta {
                d if d < 0 => start,
                d if d > 0 => end,
                _ => self.cursor,
            };
            self.move_to(target, false);
            return;
        }
        let target = offset_index(self.cursor, delta, self.len_chars());
        self.move_to(target, extend);
    }

    /// Jump to the previous word start or the next word end.
    pub fn move_word(&mut self, forward: bool, extend: bool) {
        let origin = self.motion_origin(forward, extend);
        let rope = self.content.inner();
        let target = if forward {
            find_word_end(rope, origin)
        } else {
            find_word_start(rope, origin)
        };
        self.move_to(target, extend);
    }

    /// Start of the current line; the start of the text for single-line buffers.
    pub fn move_to_line_start(&mut self, extend: bool) {
        let origin = self.motion_origin(false, extend);
        let target = if self.policy.is_multiline() {
            find_line_start(self.content.inner(), origin)
        } else {
            0
        };
        self.move_to(target, extend);
    }

    /// End of the current line; the end of the text for single-line buffers.
    pub fn move_to_line_end(&mut self, extend: bool) {
        let origin = self.motion_origin(true, extend);
        let target = if self.policy.is_multiline() {
            find_line_end(self.content.inner(), origin)
        } else {
            self.len_chars()
        };
        self.move_to(target, extend);
    }

    pub fn move_to_start(&mut self, extend: bool) {
        self.move_to(0, extend);
    }

    pub fn move_to_end(&mut self, extend: bool) {
        self.move_to(self.len_chars(), extend);
    }

    /// Move `delta_rows` display rows up or down.
    ///
    /// Single-line buffers jump to the start or end. Multi-line buffers keep
    /// the pixel column across consecutive vertical moves, so passing
    /// through a short row does not lose the original column.
    pub fn move_vertical<M: Measure + ?Sized>(
        &mut self,
        delta_rows: isize,
        extend: bool,
        layout: &WrapLayout<'_, M>,
    ) {
        if !self.policy.is_multiline() {
            match delta_rows {
                d if d < 0 => self.move_to_start(extend),
                d if d > 0 => self.move_to_end(extend),
                _ => {}
            }
            return;
        }

        let origin = self.motion_origin(delta_rows > 0, extend);
        let sticky = if origin == self.cursor {
            self.preferred_x
        } else {
            None
        };
        let (target, x) = move_cursor_vertical_with_x(
            &self.display_text(),
            origin,
            delta_rows,
            sticky,
            layout.max_width,
            layout.font,
            layout.measure,
        );
        self.move_to(target, extend);
        self.preferred_x = Some(x);
    }

    /// Place the cursor at a display position, e.g. from a mouse click.
    pub fn move_to_row_x<M: Measure + ?Sized>(
        &mut self,
        row: usize,
        x: f32,
        extend: bool,
        layout: &WrapLayout<'_, M>,
    ) {
        let lines = layout.wrap(&self.display_text());
        let target = row_x_to_index(&lines, row, x, layout.font, layout.measure);
        self.move_to(target, extend);
    }

    /// Display row and x offset of the cursor.
    #[must_use]
    pub fn cursor_row_x<M: Measure + ?Sized>(&self, layout: &WrapLayout<'_, M>) -> (usize, f32) {
        let lines = layout.wrap(&self.display_text());
        index_to_row_x(&lines, self.cursor, layout.font, layout.measure)
    }

    fn motion_origin(&self, forward: bool, extend: bool) -> usize {
        if extend || !self.has_selection() {
            return self.cursor;
        }
        let (start, end) = self.selection();
        if forward { end } else { start }
    }

    fn move_to(&mut self, target: usize, extend: bool) {
        self.cursor = target.min(self.len_chars());
        if !extend {
            self.anchor = self.cursor;
        }
        self.cursor_moved();
    }

    // ---- history -------------------------------------------------------

    /// Restore the state before the most recent edit.
    pub fn undo(&mut self) -> bool {
        if self.refuse_read_only("undo") {
            return false;
        }
        let current = self.snapshot();
        let Some(previous) = self.history.undo(current) else {
            return false;
        };
        self.restore(previous);
        true
    }

    /// Re-apply the most recently undone edit.
    pub fn redo(&mut self) -> bool {
        if self.refuse_read_only("redo") {
            return false;
        }
        let current = self.snapshot();
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        self.restore(next);
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub fn max_undo(&self) -> usize {
        self.history.max_depth()
    }

    /// Change the undo depth; excess snapshots are dropped oldest first.
    pub fn set_max_undo(&mut self, max_undo: usize) {
        self.history.set_max_depth(max_undo);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            content: self.content.clone(),
            cursor: self.cursor,
            anchor: self.anchor,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.content = snapshot.content;
        self.cursor = snapshot.cursor;
        self.anchor = snapshot.anchor;
        self.clamp_selection();
        self.content_changed();
    }

    // ---- policy --------------------------------------------------------

    #[must_use]
    pub fn policy(&self) -> &InputPolicy {
        &self.policy
    }

    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.policy.is_multiline()
    }

    /// Toggle multi-line mode.
    ///
    /// Turning it off strips existing line breaks; the stripped text becomes
    /// a fresh baseline and the history is cleared.
    pub fn set_multiline(&mut self, multiline: bool) {
        self.policy.set_flag(PolicyFlags::MULTILINE, multiline);
        if !multiline && self.content.contains_line_break() {
            let stripped = strip_line_breaks(&self.text());
            self.content.replace(&stripped);
            self.clamp_selection();
            self.history.clear();
            self.content_changed();
        }
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.policy.is_read_only()
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.policy.set_flag(PolicyFlags::READ_ONLY, read_only);
    }

    #[must_use]
    pub fn is_password(&self) -> bool {
        self.policy.is_password()
    }

    pub fn set_password(&mut self, password: bool) {
        self.policy.set_flag(PolicyFlags::PASSWORD, password);
    }

    pub fn set_mask_char(&mut self, mask_char: char) {
        self.policy.set_mask_char(mask_char);
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.policy.max_length()
    }

    /// Cap future inserts; existing content is left as is. 0 means unbounded.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.policy.set_max_length(max_length);
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        self.policy.placeholder()
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.policy.set_placeholder(placeholder);
    }

    /// Whether the host should draw the placeholder instead of the content.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.is_empty() && !self.policy.placeholder().is_empty()
    }

    pub fn set_char_filter(&mut self, filter: Option<CharFilter>) {
        self.policy.set_char_filter(filter);
    }

    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.policy.set_validator(validator);
    }

    /// Advisory validation of the current text. Never blocks editing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.policy.is_valid(&self.text())
    }

    fn refuse_read_only(&self, op: &'static str) -> bool {
        if self.policy.is_read_only() {
            tracing::debug!(op, "edit refused: buffer is read-only");
            return true;
        }
        false
    }

    // ---- blink ---------------------------------------------------------

    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.blink.visible()
    }

    /// Advance the blink state; returns `true` when visibility changed.
    pub fn update_blink(&mut self) -> bool {
        self.update_blink_at(Instant::now())
    }

    pub fn update_blink_at(&mut self, now: Instant) -> bool {
        self.blink.update(now)
    }

    pub fn set_blink_interval(&mut self, interval: Duration) {
        self.blink.set_interval(interval);
    }

    // ---- bookkeeping ---------------------------------------------------

    fn clamp_selection(&mut self) {
        let len = self.len_chars();
        self.cursor = self.cursor.min(len);
        self.anchor = self.anchor.min(len);
    }

    fn cursor_moved(&mut self) {
        self.preferred_x = None;
        self.blink.reset(Instant::now());
    }

    fn content_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.cursor_moved();
    }
}

/// `index + delta` clamped to `[0, len]`.
fn offset_index(index: usize, delta: isize, len: usize) -> usize {
    if delta < 0 {
        index.saturating_sub(delta.unsigned_abs())
    } else {
        index.saturating_add(delta.unsigned_abs()).min(len)
    }
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|&ch| ch != '\n' && ch != '\r').collect()
}
