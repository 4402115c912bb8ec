//! One poll cycle: fetch, enrich, reconcile
//!
//! [`LightMonitor`] owns the light source, the snapshot pair and the change
//! queue. The caller decides how often to call [`LightMonitor::poll`] and
//! drains the queue in between.

use lights_client::LightSource;
use tracing::{debug, info, warn};

use crate::enrich::enrich;
use crate::error::Result;
use crate::model::{ChangeEvent, Removed, Snapshot};
use crate::queue::ChangeQueue;
use crate::reconcile::ReconcileSummary;
use crate::store::SnapshotStore;

/// What a successful poll did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// First capture; the snapshot became current without diffing
    Primed { lights: usize },
    /// The fresh snapshot was diffed against current and promoted
    Reconciled(ReconcileSummary),
}

/// Watches a [`LightSource`] for changes
pub struct LightMonitor<S> {
    source: S,
    store: SnapshotStore,
    queue: ChangeQueue,
}

impl<S: LightSource> LightMonitor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: SnapshotStore::new(),
            queue: ChangeQueue::new(),
        }
    }

    /// Run one cycle
    ///
    /// The first successful cycle only captures the current state. Later
    /// cycles queue changes and hand removals to `on_removed` while the pass
    /// runs. A failed listing fetch returns an error and leaves all state
    /// untouched, so the next call simply tries again.
    pub fn poll<F>(&mut self, on_removed: F) -> Result<PollOutcome>
    where
        F: FnMut(Removed),
    {
        let summaries = self.source.fetch_all()?;
        let mut snapshot = Snapshot::from_summaries(summaries);
        debug!("Fetched listing with {} light(s)", snapshot.len());

        let report = enrich(&mut snapshot, &self.source, self.store.current());
        if report.failed > 0 {
            warn!(
                "Detail fetch failed for {} of {} light(s)",
                report.failed,
                snapshot.len()
            );
        }

        if !self.store.is_primed() {
            let lights = snapshot.len();
            info!(
                "Captured initial state of {} light(s), {} enriched",
                lights, report.enriched
            );
            self.store.prime(snapshot);
            return Ok(PollOutcome::Primed { lights });
        }

        self.store.stage(snapshot);
        let summary = self.store.reconcile(&mut self.queue, on_removed);
        if !summary.is_empty() {
            info!(
                "Detected {} field change(s), {} new and {} removed light(s)",
                summary.changed_fields, summary.added, summary.removed
            );
        }
        Ok(PollOutcome::Reconciled(summary))
    }

    /// Whether any change is waiting to be drained
    pub fn has_changes(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Oldest pending change, if any
    pub fn next_change(&mut self) -> Option<ChangeEvent> {
        self.queue.pop()
    }

    /// Take every pending change, oldest first
    pub fn drain_changes(&mut self) -> Vec<ChangeEvent> {
        self.queue.drain().collect()
    }

    pub fn pending_changes(&self) -> usize {
        self.queue.len()
    }

    /// Last confirmed snapshot, `None` before the first successful poll
    pub fn current(&self) -> Option<&Snapshot> {
        self.store.current()
    }

    pub fn is_primed(&self) -> bool {
        self.store.is_primed()
    }
}
