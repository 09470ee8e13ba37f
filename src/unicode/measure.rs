//! Text measurement capability consumed by the wrapper and geometry mapper.
//!
//! The engine never owns a font rasterizer. Hosts pass anything that
//! implements [`Measure`]; plain closures work:
//!
//! ```
//! use textedit::{FontSpec, Measure};
//!
//! let measure = |text: &str, font: FontSpec<'_>| text.chars().count() as f32 * font.size * 0.5;
//! assert_eq!(measure.measure("abcd", FontSpec::new("mono", 16.0)), 32.0);
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Font identity and size handed through to the measurement callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    pub size: f32,
}

impl<'a> FontSpec<'a> {
    /// Create a font spec.
    #[must_use]
    pub fn new(family: &'a str, size: f32) -> Self {
        Self { family, size }
    }
}

impl Default for FontSpec<'_> {
    fn default() -> Self {
        Self {
            family: "",
            size: 1.0,
        }
    }
}

/// Synchronous, side-effect-free pixel width of a string.
///
/// Implementations must be deterministic for a fixed `(text, font)` pair
/// within one layout pass and should be monotonic non-decreasing in the
/// length of a prefix; the geometry round trip relies on it.
pub trait Measure {
    /// Width in pixels of `text` rendered with `font`.
    fn measure(&self, text: &str, font: FontSpec<'_>) -> f32;
}

impl<F> Measure for F
where
    F: Fn(&str, FontSpec<'_>) -> f32,
{
    fn measure(&self, text: &str, font: FontSpec<'_>) -> f32 {
        self(text, font)
    }
}

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Display width of a string in terminal columns using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Display width of a character in terminal columns using a specific method.
#[must_use]
pub fn display_width_char_with_method(c: char, method: WidthMethod) -> usize {
    // Fast path: ASCII printable characters are always width 1
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

/// Grid measurement for character-cell backends (terminals, bitmap fonts).
///
/// Width is the display column count times `cell_width`; the font size is
/// ignored because a cell grid has a single size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMeasure {
    pub cell_width: f32,
    pub method: WidthMethod,
}

impl CellMeasure {
    /// Create a cell measure with the given cell width.
    #[must_use]
    pub fn new(cell_width: f32) -> Self {
        Self {
            cell_width,
            method: WidthMethod::WcWidth,
        }
    }

    /// Use a different ambiguous-width method.
    #[must_use]
    pub fn with_method(mut self, method: WidthMethod) -> Self {
        self.method = method;
        self
    }

    /// Column count of `text` under this measure's width method.
    #[must_use]
    pub fn columns(&self, text: &str) -> usize {
        text.chars()
            .map(|c| display_width_char_with_method(c, self.method))
            .sum()
    }
}

impl Default for CellMeasure {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Measure for CellMeasure {
    fn measure(&self, text: &str, _font: FontSpec<'_>) -> f32 {
        self.columns(text) as f32 * self.cell_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width_with_method("hello", WidthMethod::WcWidth), 5);
        assert_eq!(display_width_char_with_method('a', WidthMethod::Unicode), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width_with_method("中文", WidthMethod::WcWidth), 4);
        assert_eq!(CellMeasure::new(1.0).columns("中a"), 3);
    }

    #[test]
    fn test_cell_measure_scales_by_cell_width() {
        let measure = CellMeasure::new(8.0);
        let font = FontSpec::new("mono", 14.0);
        assert!((measure.measure("abc", font) - 24.0).abs() < f32::EPSILON);
        assert!(measure.measure("", font).abs() < f32::EPSILON);
    }

    #[test]
    fn test_closure_measure() {
        let measure = |text: &str, font: FontSpec<'_>| text.len() as f32 * font.size;
        let width = measure.measure("ab", FontSpec::new("sans", 3.0));
        assert!((width - 6.0).abs() < f32::EPSILON);
    }
}
