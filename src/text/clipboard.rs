//! Clipboard capability and copy/cut/paste on [`EditBuffer`].
//!
//! The buffer never owns a clipboard. Hosts pass their platform backend in
//! through the [`Clipboard`] trait for each operation; [`MemoryClipboard`]
//! is an in-process implementation for tests and headless hosts.

use crate::error::Result;
use crate::text::edit::EditBuffer;

/// Host clipboard service.
pub trait Clipboard {
    /// Current clipboard text, or `None` if the clipboard holds no text.
    fn text(&mut self) -> Result<Option<String>>;

    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that lives in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn text(&mut self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

impl EditBuffer {
    /// Copy the selection to `clipboard`.
    ///
    /// Returns `Ok(false)` without touching the clipboard when nothing is
    /// selected or the buffer is a password field.
    pub fn copy(&self, clipboard: &mut impl Clipboard) -> Result<bool> {
        if !self.can_export("copy") {
            return Ok(false);
        }
        clipboard.set_text(&self.selected_text())?;
        Ok(true)
    }

    /// Copy the selection to `clipboard`, then delete it.
    ///
    /// The selection is only deleted once the clipboard accepted it.
    pub fn cut(&mut self, clipboard: &mut impl Clipboard) -> Result<bool> {
        if self.is_read_only() {
            tracing::debug!("cut refused: buffer is read-only");
            return Ok(false);
        }
        if !self.can_export("cut") {
            return Ok(false);
        }
        clipboard.set_text(&self.selected_text())?;
        Ok(self.delete(0))
    }

    /// Insert the clipboard text as if typed.
    pub fn paste(&mut self, clipboard: &mut impl Clipboard) -> Result<bool> {
        if self.is_read_only() {
            tracing::debug!("paste refused: buffer is read-only");
            return Ok(false);
        }
        match clipboard.text()? {
            Some(text) => Ok(self.insert(&text)),
            None => Ok(false),
        }
    }

    fn can_export(&self, op: &'static str) -> bool {
        if self.is_password() {
            tracing::debug!(op, "clipboard export refused for password buffer");
            return false;
        }
        self.has_selection()
    }
}
