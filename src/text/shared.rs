//! Thread-safe handle to an [`EditBuffer`].
//!
//! Read accessors take the shared lock, edits take the exclusive lock for
//! their whole duration (undo snapshot included). Change events are posted
//! after the lock is released.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use parking_lot::RwLock;

use crate::error::Result;
use crate::options::BufferOptions;
use crate::text::edit::EditBuffer;
use crate::text::notify::{ChangeEvent, ChangeNotifier};

/// Cloneable, lock-guarded edit buffer.
///
/// ```
/// use textedit::SharedBuffer;
///
/// let buf = SharedBuffer::new();
/// let changes = buf.subscribe();
/// buf.insert("hi");
/// assert_eq!(changes.recv().unwrap().text, "hi");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<RwLock<EditBuffer>>,
    notifier: Arc<ChangeNotifier>,
}

impl From<EditBuffer> for SharedBuffer {
    fn from(buffer: EditBuffer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(buffer)),
            notifier: Arc::new(ChangeNotifier::new()),
        }
    }
}

impl SharedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        EditBuffer::with_options(options).into()
    }

    /// Run `f` under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&EditBuffer) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` under the write lock.
    ///
    /// If the content revision changed, one [`ChangeEvent`] is published
    /// once the lock has been released.
    pub fn edit<R>(&self, f: impl FnOnce(&mut EditBuffer) -> R) -> R {
        let (result, event) = {
            let mut buffer = self.inner.write();
            let before = buffer.revision();
            let result = f(&mut *buffer);
            // Skip the text copy when nobody listens
            let changed = buffer.revision() != before && self.notifier.has_listeners();
            let event = changed.then(|| ChangeEvent {
                revision: buffer.revision(),
                text: buffer.text(),
            });
            (result, event)
        };
        if let Some(event) = event {
            self.notifier.publish(&event);
        }
        result
    }

    /// Register the change callback. See [`ChangeNotifier::on_change`].
    pub fn on_change<F>(&self, callback: F) -> Result<()>
    where
        F: Fn(&ChangeEvent) + Send + 'static,
    {
        self.notifier.on_change(callback)
    }

    pub fn clear_on_change(&self) {
        self.notifier.clear_callback();
    }

    /// Channel receiving every subsequent change event.
    #[must_use]
    pub fn subscribe(&self) -> Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.read(EditBuffer::text)
    }

    #[must_use]
    pub fn display_text(&self) -> String {
        self.read(EditBuffer::display_text)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.read(EditBuffer::cursor)
    }

    #[must_use]
    pub fn selection(&self) -> (usize, usize) {
        self.read(EditBuffer::selection)
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.read(EditBuffer::has_selection)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.read(EditBuffer::is_valid)
    }

    pub fn insert(&self, text: &str) -> bool {
        self.edit(|b| b.insert(text))
    }

    pub fn delete(&self, count: isize) -> bool {
        self.edit(|b| b.delete(count))
    }

    pub fn delete_word(&self, forward: bool) -> bool {
        self.edit(|b| b.delete_word(forward))
    }

    pub fn move_cursor(&self, delta: isize, extend: bool) {
        self.edit(|b| b.move_cursor(delta, extend));
    }

    pub fn set_selection(&self, anchor: usize, cursor: usize) {
        self.edit(|b| b.set_selection(anchor, cursor));
    }

    pub fn select_all(&self) {
        self.edit(EditBuffer::select_all);
    }

    pub fn undo(&self) -> bool {
        self.edit(EditBuffer::undo)
    }

    pub fn redo(&self) -> bool {
        self.edit(EditBuffer::redo)
    }

    pub fn set_text(&self, text: &str) -> bool {
        self.edit(|b| b.set_text(text))
    }
}
