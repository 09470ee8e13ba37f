//! Fuzz target for edit buffer operation sequences.
//!
//! Drives arbitrary insert/delete/motion/history sequences through the
//! buffer and checks the selection, length and line-break invariants after
//! every call.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textedit::{BufferOptions, EditBuffer, FontSpec, WrapLayout, index_to_row_x, row_x_to_index};

#[derive(Arbitrary, Debug)]
enum Op {
    Insert(String),
    Delete(i8),
    DeleteWord(bool),
    Move(i8, bool),
    MoveWord(bool, bool),
    LineStart(bool),
    LineEnd(bool),
    Vertical(i8, bool),
    SelectWordAt(u8),
    SelectLine(u8),
    SetSelection(u8, u8),
    SetText(String),
    Undo,
    Redo,
}

#[derive(Arbitrary, Debug)]
struct Input {
    multiline: bool,
    max_length: u8,
    max_undo: u8,
    width: u8,
    ops: Vec<Op>,
}

fn measure(text: &str, _font: FontSpec<'_>) -> f32 {
    text.chars().count() as f32 * 7.0
}

fuzz_target!(|input: Input| {
    let mut buf = EditBuffer::with_options(
        BufferOptions::default()
            .multiline(input.multiline)
            .max_length(usize::from(input.max_length))
            .max_undo(usize::from(input.max_undo)),
    );
    let layout = WrapLayout::new(f32::from(input.width), FontSpec::default(), &measure);

    for op in input.ops.iter().take(256) {
        match op {
            Op::Insert(text) => {
                buf.insert(text);
            }
            Op::Delete(count) => {
                buf.delete(isize::from(*count));
            }
            Op::DeleteWord(forward) => {
                buf.delete_word(*forward);
            }
            Op::Move(delta, extend) => buf.move_cursor(isize::from(*delta), *extend),
            Op::MoveWord(forward, extend) => buf.move_word(*forward, *extend),
            Op::LineStart(extend) => buf.move_to_line_start(*extend),
            Op::LineEnd(extend) => buf.move_to_line_end(*extend),
            Op::Vertical(delta, extend) => {
                buf.move_vertical(isize::from(*delta), *extend, &layout);
            }
            Op::SelectWordAt(pos) => buf.select_word_at(usize::from(*pos)),
            Op::SelectLine(pos) => buf.select_line(usize::from(*pos)),
            Op::SetSelection(anchor, cursor) => {
                buf.set_selection(usize::from(*anchor), usize::from(*cursor));
            }
            Op::SetText(text) => {
                buf.set_text(text);
            }
            Op::Undo => {
                buf.undo();
            }
            Op::Redo => {
                buf.redo();
            }
        }

        let len = buf.len_chars();
        let (start, end) = buf.selection();
        assert!(start <= end && end <= len);
        if !input.multiline {
            let text = buf.text();
            assert!(!text.contains('\n') && !text.contains('\r'));
        }

        // Geometry never points outside the buffer
        let lines = layout.wrap(&buf.text());
        let (row, x) = index_to_row_x(&lines, buf.cursor(), layout.font, layout.measure);
        assert!(row < lines.len());
        assert!(row_x_to_index(&lines, row, x, layout.font, layout.measure) <= len);
    }
});
