//! Verdict counters for a session

use lockgrant_core::Verdict;
use serde::{Deserialize, Serialize};

/// Running totals of a session's decisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Requests granted
    pub granted: u64,
    /// Requests denied (one per poisoned transaction)
    pub denied: u64,
    /// Requests skipped because the requester was poisoned
    pub ignored: u64,
    /// Shared-to-exclusive upgrades by a sole holder
    pub upgrades: u64,
    /// Exclusive locks handed from one owner to another
    pub reassignments: u64,
}

impl SessionStats {
    /// Total number of requests seen
    pub fn total(&self) -> u64 {
        self.granted + self.denied + self.ignored
    }

    pub(crate) fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Granted => self.granted += 1,
            Verdict::Denied => self.denied += 1,
            Verdict::Ignored => self.ignored += 1,
        }
    }
}
