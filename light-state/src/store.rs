//! Current/incoming snapshot pair

use std::mem;

use crate::model::{Removed, Snapshot};
use crate::queue::ChangeQueue;
use crate::reconcile::{self, ReconcileSummary};

/// Holds the last confirmed snapshot and the one being assembled
///
/// `current` is `None` until the first listing has been captured.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Option<Snapshot>,
    incoming: Snapshot,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            current: None,
            incoming: Snapshot::new(),
        }
    }

    /// Whether a first snapshot has been captured
    pub fn is_primed(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn incoming(&self) -> &Snapshot {
        &self.incoming
    }

    /// Install the first snapshot directly, without diffing
    pub fn prime(&mut self, snapshot: Snapshot) {
        self.current = Some(snapshot);
    }

    /// Replace the incoming snapshot
    pub fn stage(&mut self, snapshot: Snapshot) {
        self.incoming = snapshot;
    }

    /// Diff incoming against current, then promote incoming
    ///
    /// An unprimed store diffs against an empty snapshot, so every staged
    /// light comes out as added. Promotion happens even when nothing changed,
    /// and leaves `incoming` empty for the next cycle.
    pub fn reconcile<F>(&mut self, queue: &mut ChangeQueue, on_removed: F) -> ReconcileSummary
    where
        F: FnMut(Removed),
    {
        let incoming = mem::take(&mut self.incoming);
        let summary = match &self.current {
            Some(current) => reconcile::diff(current, &incoming, queue, on_removed),
            None => reconcile::diff(&Snapshot::new(), &incoming, queue, on_removed),
        };
        self.current = Some(incoming);
        summary
    }
}
