use std::collections::VecDeque;
use std::sync::Arc;

use crate::state::EditorState;

/// Past and future editor snapshots for time travel.
///
/// Snapshots are immutable and shared, so keeping them costs one `Arc` each.
/// This is separate from the protocol's vertex-level undo: rewinding restores
/// a whole earlier snapshot, including committed holes.
#[derive(Debug)]
pub struct SnapshotHistory {
    /// Snapshots that can be rewound to, oldest first
    past: VecDeque<Arc<EditorState>>,
    /// Snapshots that can be moved forward to, most recent last
    future: Vec<Arc<EditorState>>,
    limit: usize,
}

impl SnapshotHistory {
    /// Creates an empty history keeping at most `limit` past snapshots
    pub fn new(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            limit,
        }
    }

    /// Records the snapshot being replaced. Clears anything to move forward to.
    pub fn record(&mut self, previous: Arc<EditorState>) {
        if self.limit == 0 {
            return;
        }
        if self.past.len() == self.limit {
            self.past.pop_front();
        }
        self.past.push_back(previous);
        self.future.clear();
    }

    /// Steps back one snapshot, returning it. `current` becomes reachable by `forward`.
    pub fn rewind(&mut self, current: Arc<EditorState>) -> Option<Arc<EditorState>> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    /// Steps forward one snapshot after a rewind.
    pub fn forward(&mut self, current: Arc<EditorState>) -> Option<Arc<EditorState>> {
        let next = self.future.pop()?;
        self.past.push_back(current);
        Some(next)
    }

    /// Returns true if there are snapshots to rewind to
    pub fn can_rewind(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns true if there are snapshots to move forward to
    pub fn can_forward(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn len(&self) -> usize {
        self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }

    /// Clear the snapshot history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
