//! Conversions between UTF-8 byte offsets and code-point indices.
//!
//! The engine indexes by code point everywhere. Host platform events that
//! report byte offsets are converted here, at the boundary, and never
//! threaded further in.

use crate::error::{Error, Result};

/// Convert a UTF-8 byte offset into a code-point index.
///
/// Offsets inside a multi-byte code point round down to the code point
/// that contains them; offsets past the end clamp to the code-point length.
#[must_use]
pub fn byte_to_char_index(text: &str, byte: usize) -> usize {
    if byte >= text.len() {
        return text.chars().count();
    }
    text.char_indices()
        .take_while(|&(start, _)| start < byte)
        .filter(|&(start, ch)| start + ch.len_utf8() <= byte)
        .count()
}

/// Convert a UTF-8 byte offset into a code-point index, rejecting offsets
/// that do not sit on a code point boundary.
pub fn try_byte_to_char_index(text: &str, byte: usize) -> Result<usize> {
    if byte > text.len() || !text.is_char_boundary(byte) {
        return Err(Error::NotCharBoundary {
            index: byte,
            len: text.len(),
        });
    }
    Ok(text[..byte].chars().count())
}

/// Convert a code-point index into a UTF-8 byte offset, clamping to the
/// end of the text.
#[must_use]
pub fn char_to_byte_index(text: &str, idx: usize) -> usize {
    text.char_indices()
        .nth(idx)
        .map_or(text.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_identity() {
        let text = "hello";
        for i in 0..=text.len() {
            assert_eq!(byte_to_char_index(text, i), i);
            assert_eq!(char_to_byte_index(text, i), i);
        }
    }

    #[test]
    fn test_multibyte_conversion() {
        // 'é' is 2 bytes, '中' is 3 bytes
        let text = "aé中b";
        assert_eq!(char_to_byte_index(text, 0), 0);
        assert_eq!(char_to_byte_index(text, 1), 1);
        assert_eq!(char_to_byte_index(text, 2), 3);
        assert_eq!(char_to_byte_index(text, 3), 6);
        assert_eq!(char_to_byte_index(text, 4), 7);
        assert_eq!(char_to_byte_index(text, 99), 7);

        assert_eq!(byte_to_char_index(text, 3), 2);
        assert_eq!(byte_to_char_index(text, 6), 3);
        assert_eq!(byte_to_char_index(text, 7), 4);
    }

    #[test]
    fn test_mid_code_point_rounds_down() {
        let text = "aé中b";
        assert_eq!(byte_to_char_index(text, 2), 1);
        assert_eq!(byte_to_char_index(text, 4), 2);
        assert_eq!(byte_to_char_index(text, 5), 2);
        assert_eq!(byte_to_char_index(text, 100), 4);
    }

    #[test]
    fn test_strict_conversion() {
        let text = "aé";
        assert_eq!(try_byte_to_char_index(text, 1).unwrap(), 1);
        assert_eq!(try_byte_to_char_index(text, 3).unwrap(), 2);
        assert!(matches!(
            try_byte_to_char_index(text, 2),
            Err(Error::NotCharBoundary { index: 2, len: 3 })
        ));
        assert!(try_byte_to_char_index(text, 4).is_err());
    }
}
