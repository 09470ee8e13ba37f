//! Unicode helpers at the engine boundary: text measurement and
//! byte/code-point index conversion.

mod index;
mod measure;

pub use index::{byte_to_char_index, char_to_byte_index, try_byte_to_char_index};
pub use measure::{
    CellMeasure, FontSpec, Measure, WidthMethod, display_width_char_with_method,
    display_width_with_method,
};
