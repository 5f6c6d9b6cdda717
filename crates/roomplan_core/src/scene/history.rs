//! Bounded linear snapshot history.
//!
//! # Invariants
//! - The log always holds at least one snapshot.
//! - `cursor < len()` at all times.
//! - Pushing discards every snapshot after the cursor before appending.
//! - `len() <= limit`; overflow drops the oldest snapshots.

use crate::model::item::PlacedItem;
use std::collections::VecDeque;

/// Immutable copy of the placed-item collection at one point in time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistorySnapshot {
    items: Vec<PlacedItem>,
}

impl HistorySnapshot {
    pub fn new(items: Vec<PlacedItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered snapshots plus a cursor at the active one.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    snapshots: VecDeque<HistorySnapshot>,
    cursor: usize,
    limit: usize,
}

impl HistoryLog {
    /// Creates a log holding one empty snapshot.
    ///
    /// `limit` is clamped to at least 1.
    pub fn new(limit: usize) -> Self {
        let mut snapshots = VecDeque::new();
        snapshots.push_back(HistorySnapshot::default());
        Self {
            snapshots,
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &HistorySnapshot {
        &self.snapshots[self.cursor]
    }

    pub fn get(&self, index: usize) -> Option<&HistorySnapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; the log is never empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Appends a snapshot after the cursor and moves the cursor onto it.
    ///
    /// Returns how many redo snapshots were discarded.
    pub fn push(&mut self, snapshot: HistorySnapshot) -> usize {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
        }
        self.cursor = self.snapshots.len() - 1;
        discarded
    }

    /// Steps the cursor back. Returns `false` at the lower bound.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Steps the cursor forward. Returns `false` at the upper bound.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
