//! Snapshot-based undo/redo history.
//!
//! Every mutating buffer call pushes the pre-edit [`Snapshot`] before it
//! splices. Undo and redo move exactly one snapshot between the two stacks,
//! swapping it with the current state.

use std::collections::VecDeque;

use crate::text::rope::RopeWrapper;

/// Default maximum number of undo snapshots to retain.
pub const DEFAULT_MAX_UNDO: usize = 100;

/// Full copy of the editable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub content: RopeWrapper,
    pub cursor: usize,
    pub anchor: usize,
}

/// Bounded undo/redo stacks.
#[derive(Clone, Debug)]
pub struct History {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Maximum number of undo snapshots. Oldest entries are dropped when exceeded.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_UNDO)
    }
}

impl History {
    /// Create a history with the default depth.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history with a custom maximum depth.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Maximum number of retained undo snapshots.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Change the depth limit, dropping the oldest snapshots if needed.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        self.enforce_depth();
    }

    /// Record the pre-edit state of a new edit. Invalidates redo.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.redo_stack.clear();
        self.push_undo(snapshot);
    }

    /// Swap `current` for the most recent undo snapshot.
    ///
    /// Returns the snapshot to restore, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Swap `current` for the most recently undone snapshot.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.push_undo(current);
        Some(next)
    }

    /// Number of snapshots available to undo.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots available to redo.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop all undo and redo entries.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        self.enforce_depth();
    }

    fn enforce_depth(&mut self) {
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
            tracing::trace!(excess, max_depth = self.max_depth, "evicted oldest undo snapshots");
        }
        if self.redo_stack.len() > self.max_depth {
            // Bottom of the redo stack is the furthest-out state
            let excess = self.redo_stack.len() - self.max_depth;
            self.redo_stack.drain(..excess);
            tracing::trace!(excess, max_depth = self.max_depth, "evicted oldest redo snapshots");
        }
    }
}
