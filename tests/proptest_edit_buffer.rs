//! Property-based tests for the edit buffer, wrapper and geometry mapper.
//!
//! Uses proptest to verify invariants that must hold across all operation
//! sequences and inputs.

mod common;

use common::{assert_invariants, mono};
use proptest::prelude::*;
use textedit::text::row_for_index;
use textedit::{
    BufferOptions, EditBuffer, FontSpec, WrapLayout, index_to_row_x, row_x_to_index, wrap_text,
};

// ============================================================================
// Strategies
// ============================================================================

/// Short strings mixing ASCII, whitespace, line breaks and multi-byte code points.
fn fragment() -> impl Strategy<Value = String> {
    "[a-c \\n\\ré中]{0,8}"
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String),
    Delete(isize),
    DeleteWord(bool),
    Move(isize, bool),
    MoveWord(bool, bool),
    LineStart(bool),
    LineEnd(bool),
    Start(bool),
    End(bool),
    Vertical(isize, bool),
    SelectAll,
    SelectWordAt(usize),
    SelectLine(usize),
    SetSelection(usize, usize),
    Undo,
    Redo,
}

/// Operations that never touch the history stacks directly.
fn edit_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => fragment().prop_map(Op::Insert),
        2 => (-4isize..=4).prop_map(Op::Delete),
        1 => any::<bool>().prop_map(Op::DeleteWord),
        1 => (-5isize..=5, any::<bool>()).prop_map(|(d, e)| Op::Move(d, e)),
        1 => (any::<bool>(), any::<bool>()).prop_map(|(f, e)| Op::MoveWord(f, e)),
        1 => any::<bool>().prop_map(Op::LineStart),
        1 => any::<bool>().prop_map(Op::LineEnd),
        1 => any::<bool>().prop_map(Op::Start),
        1 => any::<bool>().prop_map(Op::End),
        1 => (-2isize..=2, any::<bool>()).prop_map(|(d, e)| Op::Vertical(d, e)),
        1 => Just(Op::SelectAll),
        1 => (0usize..40).prop_map(Op::SelectWordAt),
        1 => (0usize..40).prop_map(Op::SelectLine),
        1 => (0usize..40, 0usize..40).prop_map(|(a, c)| Op::SetSelection(a, c)),
    ]
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => edit_op(),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn apply(buf: &mut EditBuffer, op: &Op) {
    let layout = WrapLayout::new(40.0, FontSpec::default(), &mono);
    match op {
        Op::Insert(text) => {
            buf.insert(text);
        }
        Op::Delete(count) => {
            buf.delete(*count);
        }
        Op::DeleteWord(forward) => {
            buf.delete_word(*forward);
        }
        Op::Move(delta, extend) => buf.move_cursor(*delta, *extend),
        Op::MoveWord(forward, extend) => buf.move_word(*forward, *extend),
        Op::LineStart(extend) => buf.move_to_line_start(*extend),
        Op::LineEnd(extend) => buf.move_to_line_end(*extend),
        Op::Start(extend) => buf.move_to_start(*extend),
        Op::End(extend) => buf.move_to_end(*extend),
        Op::Vertical(delta, extend) => buf.move_vertical(*delta, *extend, &layout),
        Op::SelectAll => buf.select_all(),
        Op::SelectWordAt(pos) => buf.select_word_at(*pos),
        Op::SelectLine(pos) => buf.select_line(*pos),
        Op::SetSelection(anchor, cursor) => buf.set_selection(*anchor, *cursor),
        Op::Undo => {
            buf.undo();
        }
        Op::Redo => {
            buf.redo();
        }
    }
}

fn state(buf: &EditBuffer) -> (String, usize, usize) {
    (buf.text(), buf.cursor(), buf.anchor())
}

// ============================================================================
// Buffer Properties
// ============================================================================

proptest! {
    /// Selection bounds, length cap and the single-line rule hold after every call.
    #[test]
    fn invariants_hold_for_any_op_sequence(
        multiline in any::<bool>(),
        max_length in 0usize..12,
        ops in prop::collection::vec(any_op(), 0..40),
    ) {
        let mut buf = EditBuffer::with_options(
            BufferOptions::default().multiline(multiline).max_length(max_length),
        );
        for op in &ops {
            apply(&mut buf, op);
            assert_invariants(&buf);
            if max_length > 0 {
                prop_assert!(buf.len_chars() <= max_length, "after {:?}", op);
            }
        }
    }

    /// Insert followed by an equal-length backward delete restores the state.
    #[test]
    fn insert_then_delete_is_inverse(
        initial in "[a-z ]{0,20}",
        pos in 0usize..25,
        text in "[a-zé ]{1,10}",
    ) {
        let mut buf = EditBuffer::with_text(&initial);
        buf.set_cursor(pos);
        let before = state(&buf);

        buf.insert(&text);
        buf.delete(-(text.chars().count() as isize));
        prop_assert_eq!(state(&buf), before);
    }

    /// Undo after an edit restores the pre-edit state; redo restores the post-edit state.
    #[test]
    fn undo_redo_round_trip(
        multiline in any::<bool>(),
        ops in prop::collection::vec(edit_op(), 1..30),
    ) {
        let mut buf = EditBuffer::with_options(BufferOptions::default().multiline(multiline));
        for op in &ops {
            let before = state(&buf);
            let revision = buf.revision();
            apply(&mut buf, op);
            if buf.revision() == revision {
                continue;
            }
            let after = state(&buf);

            prop_assert!(buf.undo());
            prop_assert_eq!(state(&buf), before);
            prop_assert!(buf.redo());
            prop_assert_eq!(state(&buf), after);
        }
    }

    /// Only the newest `max_undo` pre-edit states are recoverable.
    #[test]
    fn max_undo_evicts_oldest(max_undo in 1usize..8) {
        let mut buf = EditBuffer::with_options(BufferOptions::default().max_undo(max_undo));
        for _ in 0..=max_undo {
            buf.insert("a");
        }
        for _ in 0..max_undo {
            prop_assert!(buf.undo());
        }
        prop_assert_eq!(buf.text(), "a");
        prop_assert!(!buf.undo());
    }

    /// No insert can push the content past the maximum length.
    #[test]
    fn max_length_clamps_every_insert(
        max_length in 1usize..20,
        inserts in prop::collection::vec("[a-z]{0,30}", 1..5),
        select_first in any::<bool>(),
    ) {
        let mut buf = EditBuffer::with_options(BufferOptions::default().max_length(max_length));
        for text in &inserts {
            if select_first {
                buf.select_word_at(0);
            }
            buf.insert(text);
            prop_assert!(buf.len_chars() <= max_length);
        }
    }

    /// Selection is always ordered, whichever end the cursor is on.
    #[test]
    fn selection_is_ordered(
        initial in "[a-z ]{0,20}",
        anchor in 0usize..30,
        cursor in 0usize..30,
    ) {
        let mut buf = EditBuffer::with_text(&initial);
        buf.set_selection(anchor, cursor);
        let len = buf.len_chars();
        let (start, end) = buf.selection();
        prop_assert!(start <= end);
        prop_assert_eq!(start, anchor.min(len).min(cursor.min(len)));
        prop_assert_eq!(end, anchor.min(len).max(cursor.min(len)));
    }
}

// ============================================================================
// Wrapper and Geometry Properties
// ============================================================================

proptest! {
    /// Rows cover the text in order; only trimmed whitespace and hard
    /// breaks fall between rows.
    #[test]
    fn wrap_partitions_text(text in "[a-z \\n]{0,60}", columns in 1usize..20) {
        let max_width = columns as f32 * 8.0;
        let lines = wrap_text(&text, max_width, FontSpec::default(), &mono);
        let chars: Vec<char> = text.chars().collect();

        prop_assert!(!lines.is_empty());
        prop_assert_eq!(lines[0].start, 0);
        prop_assert_eq!(lines[lines.len() - 1].end, chars.len());

        for line in &lines {
            let expected: String = chars[line.start..line.end].iter().collect();
            prop_assert_eq!(&line.text, &expected);
            prop_assert!(mono(&line.text, FontSpec::default()) <= max_width);
        }
        for pair in lines.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
            let gap = &chars[pair[0].end..pair[1].start];
            prop_assert!(gap.iter().all(|c| c.is_whitespace()));
            let newlines = gap.iter().filter(|&&c| c == '\n').count();
            prop_assert!(newlines <= 1);
            if newlines == 1 {
                prop_assert_eq!(gap.last(), Some(&'\n'));
            }
        }
        let hard_breaks = chars.iter().filter(|&&c| c == '\n').count();
        prop_assert!(lines.len() > hard_breaks);
    }

    /// Hard breaks alone reproduce the text when soft wrapping is disabled.
    #[test]
    fn unwrapped_rows_join_to_text(text in "[a-z \\n]{0,60}") {
        let lines = wrap_text(&text, 0.0, FontSpec::default(), &mono);
        let joined: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        prop_assert_eq!(joined.join("\n"), text);
    }

    /// Every displayable index survives index -> (row, x) -> index.
    #[test]
    fn geometry_round_trip(text in "[a-z \\n]{0,60}", columns in 1usize..20) {
        let font = FontSpec::default();
        let lines = wrap_text(&text, columns as f32 * 8.0, font, &mono);
        let len = text.chars().count();

        for index in 0..=len {
            let (row, x) = index_to_row_x(&lines, index, font, &mono);
            prop_assert_eq!(row, row_for_index(&lines, index));
            let line = &lines[row];
            let back = row_x_to_index(&lines, row, x, font, &mono);
            prop_assert_eq!(back, index.clamp(line.start, line.end));
        }
    }

    /// Vertical motion always lands inside the buffer.
    #[test]
    fn vertical_motion_stays_in_bounds(
        text in "[a-z \\n]{0,40}",
        start in 0usize..45,
        deltas in prop::collection::vec(-3isize..=3, 1..10),
    ) {
        let layout = WrapLayout::new(48.0, FontSpec::default(), &mono);
        let mut buf = EditBuffer::with_options(BufferOptions::default().multiline(true));
        buf.set_text(&text);
        buf.set_cursor(start);
        for delta in deltas {
            buf.move_vertical(delta, false, &layout);
            prop_assert!(buf.cursor() <= buf.len_chars());
            prop_assert!(!buf.has_selection());
        }
    }

    /// Pressing Up once per display row always reaches the start.
    #[test]
    fn repeated_up_reaches_start(text in "[a-z \\n]{0,40}", start in 0usize..45) {
        let layout = WrapLayout::new(48.0, FontSpec::default(), &mono);
        let rows = layout.wrap(&text).len();
        let mut buf = EditBuffer::with_options(BufferOptions::default().multiline(true));
        buf.set_text(&text);
        buf.set_cursor(start);
        for _ in 0..rows {
            buf.move_vertical(-1, false, &layout);
        }
        prop_assert_eq!(buf.cursor(), 0);
    }
}
