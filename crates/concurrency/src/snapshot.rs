//! Point-in-time view of a session
//!
//! Items and poisoned transactions are sorted by id so that two sessions fed
//! the same requests produce identical snapshots.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "items": {
//!     "100": {"state": "shared", "holders": [1, 3]},
//!     "200": {"state": "exclusive", "owner": 2}
//!   },
//!   "poisoned": [4],
//!   "stats": {"granted": 4, "denied": 1, "ignored": 0, "upgrades": 0, "reassignments": 0}
//! }
//! ```

use crate::stats::SessionStats;
use lockgrant_core::{ItemId, LockState, Result, TxnId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable copy of a session's state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Locked items and their states, ordered by item id
    pub items: BTreeMap<ItemId, LockState>,
    /// Poisoned transactions in ascending order
    pub poisoned: Vec<TxnId>,
    /// Verdict counters at the time of the snapshot
    pub stats: SessionStats,
}

impl SessionSnapshot {
    /// Encode as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON produced by [`SessionSnapshot::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// State of `item`, `Unlocked` if it was never locked
    pub fn state_of(&self, item: ItemId) -> LockState {
        self.items.get(&item).cloned().unwrap_or_default()
    }
}
