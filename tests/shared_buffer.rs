//! Concurrency and change notification through `SharedBuffer`.

mod common;

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use common::setup_test_logging;
use textedit::{BufferOptions, ChangeEvent, SharedBuffer};

#[test]
fn edits_from_many_threads_are_serialized() {
    setup_test_logging();
    let buf = SharedBuffer::new();
    let rx = buf.subscribe();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let buf = buf.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    buf.insert("x");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(buf.text().len(), 100);
    // Publishing happens after the lock is released, so writers may interleave
    let mut revisions: Vec<u64> = rx.try_iter().map(|event| event.revision).collect();
    revisions.sort_unstable();
    assert_eq!(revisions, (1..=100).collect::<Vec<_>>());
}

#[test]
fn callback_may_rewrite_the_buffer() {
    setup_test_logging();
    let buf = SharedBuffer::with_options(BufferOptions::default());
    let (tx, rx) = mpsc::channel();
    let handle = buf.clone();
    buf.on_change(move |event: &ChangeEvent| {
        // Normalize to upper case from inside the callback
        let upper = event.text.to_uppercase();
        if upper != event.text {
            handle.set_text(&upper);
        }
        let _ = tx.send(event.text.clone());
    })
    .unwrap();

    buf.insert("abc");
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), "abc");
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), "ABC");
    assert_eq!(buf.text(), "ABC");
}

#[test]
fn edit_closure_publishes_once() {
    let buf = SharedBuffer::new();
    let rx = buf.subscribe();
    let changed = buf.edit(|b| {
        b.insert("one ");
        b.insert("two");
        b.select_all();
        b.has_selection()
    });
    assert!(changed);

    let events: Vec<ChangeEvent> = rx.try_iter().collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].text, "one two");
    assert_eq!(buf.read(|b| b.selected_text()), "one two");
}

#[test]
fn undo_redo_notify() {
    let buf = SharedBuffer::new();
    buf.insert("a");
    let rx = buf.subscribe();
    assert!(buf.undo());
    assert!(buf.redo());
    assert!(!buf.redo());
    let texts: Vec<String> = rx.try_iter().map(|event| event.text).collect();
    assert_eq!(texts, vec![String::new(), "a".to_string()]);
}
