//! Buffer configuration.

use std::time::Duration;

use crate::text::{DEFAULT_BLINK_INTERVAL, DEFAULT_MASK_CHAR, DEFAULT_MAX_UNDO};

/// Options for constructing an [`EditBuffer`](crate::EditBuffer).
///
/// ```
/// use textedit::{BufferOptions, EditBuffer};
///
/// let mut buf = EditBuffer::with_options(BufferOptions::default().max_length(5));
/// buf.insert("hello world");
/// assert_eq!(buf.text(), "hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferOptions {
    /// Allow newlines and row-to-row vertical motion.
    pub multiline: bool,
    /// Refuse all content mutation.
    pub read_only: bool,
    /// Mask the content for display and refuse clipboard export.
    pub password: bool,
    /// Character used by the password mask.
    pub mask_char: char,
    /// Maximum content length in code points; 0 means unbounded.
    pub max_length: usize,
    /// Maximum retained undo snapshots.
    pub max_undo: usize,
    /// Hint text shown by the host while the buffer is empty.
    pub placeholder: String,
    /// Cursor blink half-period.
    pub blink_interval: Duration,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            multiline: false,
            read_only: false,
            password: false,
            mask_char: DEFAULT_MASK_CHAR,
            max_length: 0,
            max_undo: DEFAULT_MAX_UNDO,
            placeholder: String::new(),
            blink_interval: DEFAULT_BLINK_INTERVAL,
        }
    }
}

impl BufferOptions {
    #[must_use]
    pub fn multiline(mut self, enabled: bool) -> Self {
        self.multiline = enabled;
        self
    }

    #[must_use]
    pub fn read_only(mut self, enabled: bool) -> Self {
        self.read_only = enabled;
        self
    }

    #[must_use]
    pub fn password(mut self, enabled: bool) -> Self {
        self.password = enabled;
        self
    }

    #[must_use]
    pub fn mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn max_undo(mut self, max_undo: usize) -> Self {
        self.max_undo = max_undo;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = BufferOptions::default();
        assert!(!opts.multiline);
        assert!(!opts.read_only);
        assert!(!opts.password);
        assert_eq!(opts.max_length, 0);
        assert_eq!(opts.max_undo, 100);
        assert_eq!(opts.mask_char, '•');
        assert_eq!(opts.blink_interval, Duration::from_millis(530));
    }

    #[test]
    fn test_builder_chain() {
        let opts = BufferOptions::default()
            .multiline(true)
            .password(true)
            .mask_char('*')
            .max_length(8)
            .max_undo(3)
            .placeholder("Search");
        assert!(opts.multiline);
        assert!(opts.password);
        assert_eq!(opts.mask_char, '*');
        assert_eq!(opts.max_length, 8);
        assert_eq!(opts.max_undo, 3);
        assert_eq!(opts.placeholder, "Search");
    }
}
