//! `textedit` - text-editing engine for input widgets
//!
//! Maintains an editable code-point sequence with a cursor, a selection,
//! an input policy and bounded snapshot undo/redo, and maps buffer indices
//! to wrapped display rows and back. Rendering, fonts and clipboards stay
//! with the host and are passed in as capabilities.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional row/delta casts
#![allow(clippy::cast_sign_loss)] // Intentional row/delta casts
#![allow(clippy::cast_precision_loss)] // Code-point counts as pixel widths
#![allow(clippy::cast_possible_wrap)] // Row indices fit in isize
#![allow(clippy::module_name_repetitions)] // Allow text::TextBuffer-style names
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::float_cmp)] // Exact pixel offsets in tests
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod error;
pub mod options;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use options::BufferOptions;

// Re-export text types
pub use text::{
    ChangeEvent, Clipboard, CursorBlink, EditBuffer, InputPolicy, MemoryClipboard, PolicyFlags,
    SharedBuffer, WrapLayout, WrappedLine, index_to_row_x, move_cursor_vertical,
    move_cursor_vertical_with_x, row_x_to_index, wrap_text,
};

// Re-export measurement and index adapters
pub use unicode::{
    CellMeasure, FontSpec, Measure, WidthMethod, byte_to_char_index, char_to_byte_index,
    try_byte_to_char_index,
};
