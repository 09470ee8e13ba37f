//! Input policy: read-only mode, length cap, character filter, validator
//! and password masking.
//!
//! The policy never changes buffer invariants. It only shapes what text an
//! insert is allowed to splice in, and how the content is displayed.

use std::fmt;

use bitflags::bitflags;

/// Default mask character for password buffers.
pub const DEFAULT_MASK_CHAR: char = '•';

bitflags! {
    /// Boolean policy switches for an edit buffer.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct PolicyFlags: u8 {
        /// Newlines are allowed and vertical motion moves between rows.
        const MULTILINE = 0x01;
        /// All content mutation is refused.
        const READ_ONLY = 0x02;
        /// Content is displayed masked and never copied out.
        const PASSWORD  = 0x04;
    }
}

/// Predicate deciding whether a single code point may be inserted.
pub type CharFilter = Box<dyn Fn(char) -> bool + Send + Sync>;

/// Advisory predicate over the full text.
pub type Validator = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Input policy attached to an edit buffer.
pub struct InputPolicy {
    flags: PolicyFlags,
    /// 0 means unbounded.
    max_length: usize,
    mask_char: char,
    placeholder: String,
    char_filter: Option<CharFilter>,
    validator: Option<Validator>,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            flags: PolicyFlags::empty(),
            max_length: 0,
            mask_char: DEFAULT_MASK_CHAR,
            placeholder: String::new(),
            char_filter: None,
            validator: None,
        }
    }
}

impl fmt::Debug for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputPolicy")
            .field("flags", &self.flags)
            .field("max_length", &self.max_length)
            .field("mask_char", &self.mask_char)
            .field("placeholder", &self.placeholder)
            .field("char_filter", &self.char_filter.is_some())
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

impl InputPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn flags(&self) -> PolicyFlags {
        self.flags
    }

    pub fn set_flag(&mut self, flag: PolicyFlags, enabled: bool) {
        self.flags.set(flag, enabled);
    }

    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.flags.contains(PolicyFlags::MULTILINE)
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.flags.contains(PolicyFlags::READ_ONLY)
    }

    #[must_use]
    pub fn is_password(&self) -> bool {
        self.flags.contains(PolicyFlags::PASSWORD)
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }

    #[must_use]
    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    pub fn set_mask_char(&mut self, mask_char: char) {
        self.mask_char = mask_char;
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Install or clear the per-character insert filter.
    pub fn set_char_filter(&mut self, filter: Option<CharFilter>) {
        self.char_filter = filter;
    }

    /// Install or clear the advisory validator.
    pub fn set_validator(&mut self, validator: Option<Validator>) {
        self.validator = validator;
    }

    /// Whether `ch` passes the character filter.
    #[must_use]
    pub fn allows_char(&self, ch: char) -> bool {
        self.char_filter.as_ref().is_none_or(|filter| filter(ch))
    }

    /// Run the validator; text is valid when no validator is installed.
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        self.validator.as_ref().is_none_or(|validator| validator(text))
    }

    /// Apply newline stripping (single-line buffers) and the character filter.
    #[must_use]
    pub fn sanitize(&self, text: &str) -> String {
        let multiline = self.is_multiline();
        let sanitized: String = text
            .chars()
            .filter(|&ch| multiline || (ch != '\n' && ch != '\r'))
            .filter(|&ch| self.allows_char(ch))
            .collect();
        let dropped = text.chars().count() - sanitized.chars().count();
        if dropped > 0 {
            tracing::trace!(dropped, "insert text reduced by input policy");
        }
        sanitized
    }

    /// Remaining code-point capacity for an insert that replaces
    /// `selection_len` code points of a `current_len` document.
    ///
    /// Returns `None` when the buffer is unbounded.
    #[must_use]
    pub fn remaining_capacity(&self, current_len: usize, selection_len: usize) -> Option<usize> {
        if self.max_length == 0 {
            return None;
        }
        let kept = current_len.saturating_sub(selection_len);
        Some(self.max_length.saturating_sub(kept))
    }

    /// Truncate `text` to the remaining capacity.
    ///
    /// Returns the text to insert and whether anything was cut off.
    #[must_use]
    pub fn truncate_to_capacity(
        &self,
        text: String,
        current_len: usize,
        selection_len: usize,
    ) -> (String, bool) {
        let Some(capacity) = self.remaining_capacity(current_len, selection_len) else {
            return (text, false);
        };
        let requested = text.chars().count();
        if requested <= capacity {
            return (text, false);
        }
        (text.chars().take(capacity).collect(), true)
    }

    /// Mask string of `len` copies of the mask character.
    #[must_use]
    pub fn mask(&self, len: usize) -> String {
        std::iter::repeat_n(self.mask_char, len).collect()
    }
}
