//! Text storage, editing, wrapping and cursor geometry.
//!
//! Key types:
//!
//! - [`EditBuffer`]: content, cursor, selection, input policy and undo/redo
//! - [`SharedBuffer`]: lock-guarded handle with change notification
//! - [`wrap_text`] / [`WrappedLine`]: soft wrapping for display
//! - [`index_to_row_x`] / [`row_x_to_index`]: cursor geometry
//!
//! # Examples
//!
//! ## Editing with undo
//!
//! ```
//! use textedit::EditBuffer;
//!
//! let mut editor = EditBuffer::new();
//! editor.insert("Hello");
//! editor.insert(" World");
//! assert_eq!(editor.text(), "Hello World");
//!
//! // Each insert is its own undo step
//! editor.undo();
//! assert_eq!(editor.text(), "Hello");
//!
//! editor.redo();
//! assert_eq!(editor.text(), "Hello World");
//! ```
//!
//! ## Wrapping and geometry
//!
//! ```
//! use textedit::{CellMeasure, FontSpec, index_to_row_x, wrap_text};
//!
//! let measure = CellMeasure::new(8.0);
//! let font = FontSpec::default();
//! let lines = wrap_text("hello world", 56.0, font, &measure);
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[1].text, "world");
//!
//! // Index 8 is the "r" in "world": second row, two cells in
//! assert_eq!(index_to_row_x(&lines, 8, font, &measure), (1, 16.0));
//! ```

mod blink;
mod boundary;
mod clipboard;
mod edit;
mod geometry;
mod history;
mod notify;
mod policy;
mod rope;
mod shared;
mod wrap;

pub use blink::{CursorBlink, DEFAULT_BLINK_INTERVAL};
pub use boundary::{
    CharSource, find_line_end, find_line_start, find_word_end, find_word_start, is_whitespace,
    word_range_at,
};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use edit::EditBuffer;
pub use geometry::{
    WrapLayout, index_to_row_x, move_cursor_vertical, move_cursor_vertical_with_x,
    row_for_index, row_x_to_index,
};
pub use history::{DEFAULT_MAX_UNDO, History, Snapshot};
pub use notify::{ChangeEvent, ChangeNotifier};
pub use policy::{CharFilter, DEFAULT_MASK_CHAR, InputPolicy, PolicyFlags, Validator};
pub use rope::RopeWrapper;
pub use shared::SharedBuffer;
pub use wrap::{WrappedLine, wrap_text};
