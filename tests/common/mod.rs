#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Once;

use textedit::{EditBuffer, FontSpec};

/// Install a fmt subscriber once per test binary.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Monospace measurement: every code point is 8 pixels wide.
pub fn mono(text: &str, _font: FontSpec<'_>) -> f32 {
    text.chars().count() as f32 * 8.0
}

/// Check the structural invariants that must hold after every call.
pub fn assert_invariants(buf: &EditBuffer) {
    let len = buf.len_chars();
    let (start, end) = buf.selection();
    assert!(start <= end, "selection out of order: ({start}, {end})");
    assert!(end <= len, "selection end {end} past length {len}");
    assert!(buf.cursor() <= len);
    assert!(buf.anchor() <= len);
    assert_eq!(buf.text().chars().count(), len);
    if !buf.is_multiline() {
        let text = buf.text();
        assert!(
            !text.contains('\n') && !text.contains('\r'),
            "single-line buffer holds a line break: {text:?}"
        );
    }
}
