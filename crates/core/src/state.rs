//! Per-item lock state
//!
//! Every item is in exactly one of three states:
//!
//! ```text
//!   Unlocked ──S──▶ Shared{holders} ──X (sole holder)──▶ Exclusive{owner}
//!                                                          │   ▲
//!                                                          └─X─┘ (owner reassigned)
//! ```
//!
//! There is no release transition. Once an item leaves `Unlocked` it never
//! returns, and once it is `Exclusive` it stays `Exclusive`.

use crate::mode::LockMode;
use crate::types::TxnId;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Shared holders of an item, in acquisition order
///
/// Most items are held by a handful of transactions, so holders stay inline.
pub type Holders = SmallVec<[TxnId; 4]>;

/// Lock state of a single item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LockState {
    /// No transaction holds a lock
    #[default]
    Unlocked,
    /// Held in shared mode; never empty, no duplicates
    Shared {
        /// Holders ordered by acquisition; the first is the earliest
        holders: Holders,
    },
    /// Held in exclusive mode by one transaction
    Exclusive {
        /// Current owner
        owner: TxnId,
    },
}

impl LockState {
    /// Shared state with a single initial holder
    pub fn shared(first: TxnId) -> Self {
        LockState::Shared {
            holders: smallvec![first],
        }
    }

    /// Exclusive state owned by `owner`
    pub fn exclusive(owner: TxnId) -> Self {
        LockState::Exclusive { owner }
    }

    /// Check if no lock is held
    pub fn is_unlocked(&self) -> bool {
        matches!(self, LockState::Unlocked)
    }

    /// Mode the item is currently held in, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use lockgrant_core::{LockMode, LockState, TxnId};
    ///
    /// assert_eq!(LockState::Unlocked.mode(), None);
    /// assert_eq!(LockState::shared(TxnId(1)).mode(), Some(LockMode::Shared));
    /// assert_eq!(LockState::exclusive(TxnId(1)).mode(), Some(LockMode::Exclusive));
    /// ```
    pub fn mode(&self) -> Option<LockMode> {
        match self {
            LockState::Unlocked => None,
            LockState::Shared { .. } => Some(LockMode::Shared),
            LockState::Exclusive { .. } => Some(LockMode::Exclusive),
        }
    }

    /// All transactions currently holding the item
    ///
    /// Shared holders in acquisition order, or the single exclusive owner.
    pub fn holders(&self) -> &[TxnId] {
        match self {
            LockState::Unlocked => &[],
            LockState::Shared { holders } => holders.as_slice(),
            LockState::Exclusive { owner } => std::slice::from_ref(owner),
        }
    }

    /// Exclusive owner, if the item is held exclusively
    pub fn owner(&self) -> Option<TxnId> {
        match self {
            LockState::Exclusive { owner } => Some(*owner),
            _ => None,
        }
    }

    /// The only shared holder, if there is exactly one
    pub fn sole_shared_holder(&self) -> Option<TxnId> {
        match self {
            LockState::Shared { holders } if holders.len() == 1 => Some(holders[0]),
            _ => None,
        }
    }

    /// Check if `txn` holds the item in any mode
    pub fn is_held_by(&self, txn: TxnId) -> bool {
        self.holders().contains(&txn)
    }
}
