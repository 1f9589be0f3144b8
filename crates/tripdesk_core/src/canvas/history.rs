//! Linear undo history of canvas snapshots.

use crate::model::drawing::CanvasSnapshot;

/// Append-only snapshot list with a pointer at the displayed entry.
///
/// There is no redo: recording after an undo drops the undone branch.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: Vec<CanvasSnapshot>,
    pointer: usize,
    limit: Option<usize>,
}

impl SnapshotHistory {
    /// History whose first entry is `initial`.
    pub fn new(initial: CanvasSnapshot, limit: Option<usize>) -> Self {
        Self {
            entries: vec![initial],
            pointer: 0,
            limit: limit.map(|limit| limit.max(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry currently shown.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn current(&self) -> &CanvasSnapshot {
        &self.entries[self.pointer]
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Truncates after the pointer, appends, and points at the new entry.
    /// Evicts the oldest entries beyond the configured limit.
    pub fn record(&mut self, snapshot: CanvasSnapshot) {
        self.entries.truncate(self.pointer + 1);
        self.entries.push(snapshot);
        if let Some(limit) = self.limit {
            let overflow = self.entries.len().saturating_sub(limit);
            self.entries.drain(..overflow);
        }
        self.pointer = self.entries.len() - 1;
    }

    /// Entry an undo would step back to, without moving the pointer.
    pub fn previous(&self) -> Option<&CanvasSnapshot> {
        self.pointer.checked_sub(1).map(|index| &self.entries[index])
    }

    /// Steps back one entry and returns it; `None` at the first entry.
    pub fn undo(&mut self) -> Option<&CanvasSnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.pointer -= 1;
        Some(&self.entries[self.pointer])
    }
}
