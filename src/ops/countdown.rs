use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::model::RowId;

/// Pending delayed deletions, keyed by row identity.
///
/// Invariant: at most one deadline per row. Scheduling a row that already
/// has a deadline replaces it; cancelling a row without one is a no-op.
#[derive(Debug, Default)]
pub struct Countdowns {
    deadlines: HashMap<RowId, Instant>,
}

impl Countdowns {
    pub fn new() -> Self {
        Countdowns::default()
    }

    /// Schedule deletion of `id` at `now + window`, replacing any previous
    /// deadline for the same row.
    pub fn schedule(&mut self, id: RowId, now: Instant, window: Duration) {
        self.deadlines.insert(id, now + window);
    }

    /// Cancel a pending deletion. Idempotent. Returns true if a deadline
    /// was actually pending.
    pub fn cancel(&mut self, id: RowId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    pub fn is_pending(&self, id: RowId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Earliest pending deadline. The event loop clamps its poll timeout
    /// to this so expiry fires promptly.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Remove and return every row whose deadline is at or before `now`,
    /// ordered by deadline (ties broken by row id for determinism).
    pub fn drain_due(&mut self, now: Instant) -> Vec<RowId> {
        let mut due: Vec<(Instant, RowId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Drop deadlines for rows that no longer exist (after an external
    /// reload replaced the list).
    pub fn retain(&mut self, mut live: impl FnMut(RowId) -> bool) {
        self.deadlines.retain(|id, _| live(*id));
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}
