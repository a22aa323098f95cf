//! Snapshot-based undo history.
//!
//! Every entry is a full, owned copy of a [`PixelBuffer`]. Snapshots are
//! never mutated once pushed, so restoring one always yields exactly the
//! image that was committed at the time.

use std::collections::VecDeque;

use crate::buffer::PixelBuffer;

/// LIFO stack of committed-image snapshots.
///
/// Unbounded by default. With a limit set, pushing past the limit discards
/// the oldest snapshot.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    snapshots: VecDeque<PixelBuffer>,
    limit: Option<usize>,
}

impl UndoHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that keeps at most `limit` snapshots.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Push a snapshot onto the top of the stack.
    pub fn push(&mut self, snapshot: PixelBuffer) {
        if self.limit == Some(0) {
            return;
        }
        self.snapshots.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit {
                self.snapshots.pop_front();
            }
        }
    }

    /// Remove and return the most recent snapshot, or `None` when empty.
    pub fn pop(&mut self) -> Option<PixelBuffer> {
        self.snapshots.pop_back()
    }

    /// The most recent snapshot without removing it.
    pub fn peek(&self) -> Option<&PixelBuffer> {
        self.snapshots.back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
