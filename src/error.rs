//! Error types for the text-editing engine.
//!
//! Editing itself never fails: out-of-range indices are clamped and
//! disallowed edits become no-ops. Errors only surface at the host
//! boundary (clipboard backends, dispatcher threads, strict byte-offset
//! conversion).

use std::fmt;
use std::io;

/// Result type alias for engine operations that touch the host boundary.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for boundary operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error, e.g. the change dispatcher thread could not be spawned.
    Io(io::Error),
    /// The host clipboard backend failed.
    Clipboard(String),
    /// A byte offset did not land on a code point boundary.
    NotCharBoundary { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Clipboard(msg) => write!(f, "clipboard error: {msg}"),
            Self::NotCharBoundary { index, len } => {
                write!(
                    f,
                    "byte offset {index} is not a char boundary in text of {len} bytes"
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
