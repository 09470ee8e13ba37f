//! Change notification by message passing.
//!
//! Events are posted after the buffer lock is released. Callbacks run on a
//! dedicated dispatcher thread, so a callback may lock the buffer again
//! without deadlocking against the edit that triggered it.

use std::panic::AssertUnwindSafe;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use parking_lot::Mutex;

use crate::error::Result;

/// A content change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Buffer revision after the change.
    pub revision: u64,
    /// Full text after the change.
    pub text: String,
}

#[derive(Default)]
struct Listeners {
    callback: Option<Sender<ChangeEvent>>,
    subscribers: Vec<Sender<ChangeEvent>>,
}

/// Fan-out of change events to a callback thread and channel subscribers.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Mutex<Listeners>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.lock();
        f.debug_struct("ChangeNotifier")
            .field("callback", &listeners.callback.is_some())
            .field("subscribers", &listeners.subscribers.len())
            .finish()
    }
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `callback`, replacing any previous one.
    ///
    /// Spawns a dispatcher thread that calls `callback` once per event, in
    /// order. The previous dispatcher drains its queue and exits. A panic in
    /// the callback is caught and logged; later events are still delivered.
    pub fn on_change<F>(&self, callback: F) -> Result<()>
    where
        F: Fn(&ChangeEvent) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<ChangeEvent>();
        thread::Builder::new()
            .name("textedit-change".to_string())
            .spawn(move || dispatch_loop(&rx, &callback))?;
        self.listeners.lock().callback = Some(tx);
        Ok(())
    }

    /// Remove the callback; its dispatcher thread exits once drained.
    pub fn clear_callback(&self) {
        self.listeners.lock().callback = None;
    }

    /// Channel receiving every subsequent event.
    ///
    /// Dropping the receiver unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> Receiver<ChangeEvent> {
        let (tx, rx) = mpsc::channel();
        self.listeners.lock().subscribers.push(tx);
        rx
    }

    /// Post `event` to every listener, dropping disconnected ones.
    pub fn publish(&self, event: &ChangeEvent) {
        let mut listeners = self.listeners.lock();
        if listeners
            .callback
            .as_ref()
            .is_some_and(|tx| tx.send(event.clone()).is_err())
        {
            tracing::debug!("change dispatcher gone, dropping callback");
            listeners.callback = None;
        }
        listeners
            .subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[must_use]
    pub fn has_listeners(&self) -> bool {
        let listeners = self.listeners.lock();
        listeners.callback.is_some() || !listeners.subscribers.is_empty()
    }
}

fn dispatch_loop<F: Fn(&ChangeEvent)>(rx: &Receiver<ChangeEvent>, callback: &F) {
    tracing::debug!("change dispatcher started");
    for event in rx {
        let result = std::panic::catch_unwind(AssertUnwindSafe(|| callback(&event)));
        if let Err(payload) = result {
            tracing::debug!(
                revision = event.revision,
                panic = %panic_message(payload.as_ref()),
                "change callback panicked"
            );
        }
    }
    tracing::debug!("change dispatcher stopped");
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "change callback panicked".to_string())
}
