//! Lock session: the per-dataset lock manager
//!
//! A session owns the lock table for one dataset and evaluates requests one
//! at a time, strictly in call order. Nothing blocks and nothing is released:
//! every request resolves immediately to a [`Verdict`], and locks persist
//! until the session is dropped.
//!
//! ## Evaluation
//!
//! ```text
//! 1. Requester poisoned?                       → IGNORE
//! 2. Shared request
//!    a. item Exclusive, owned by requester     → GRANTED (no change)
//!    b. item Exclusive, other owner            → DENIED
//!    c. item Unlocked or Shared                → GRANTED, requester joins holders
//! 3. Exclusive request
//!    a. item Shared, requester is sole holder  → GRANTED, item becomes Exclusive
//!    b. item Shared, otherwise                 → DENIED
//!    c. item Exclusive (any owner)             → GRANTED, owner := requester
//!    d. item Unlocked                          → DENIED
//! ```
//!
//! Every DENIED verdict poisons the requester for the rest of the session.
//!
//! Rule 3c hands an exclusive lock to a new owner without checking who held
//! it. Rule 3d refuses an exclusive lock on a never-locked item. Both are
//! part of the verdict contract and must not be "corrected".

use crate::history::Decision;
use crate::options::{SessionBuilder, SessionOptions};
use crate::snapshot::SessionSnapshot;
use crate::stats::SessionStats;
use lockgrant_core::{ItemId, LockMode, LockRequest, LockState, TxnId, Verdict};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use tracing::{debug, trace};

static UNLOCKED: LockState = LockState::Unlocked;

/// Lock manager state for a single dataset
///
/// # Example
///
/// ```
/// use lockgrant_concurrency::{LockMode, LockSession, Verdict};
///
/// let mut session = LockSession::new();
/// assert_eq!(session.evaluate(1, 100, LockMode::Shared), Verdict::Granted);
/// assert_eq!(session.evaluate(2, 100, LockMode::Exclusive), Verdict::Denied);
/// assert_eq!(session.evaluate(2, 200, LockMode::Shared), Verdict::Ignored);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LockSession {
    /// Lock state per item; absent means Unlocked
    locks: FxHashMap<ItemId, LockState>,

    /// Transactions denied at least once. Only grows.
    poisoned: FxHashSet<TxnId>,

    stats: SessionStats,

    /// Decision log, only kept when `options.record_history` is set
    history: Vec<Decision>,

    options: SessionOptions,
}

impl LockSession {
    /// Create an empty session with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with explicit options
    pub fn with_options(options: SessionOptions) -> Self {
        LockSession {
            locks: FxHashMap::with_capacity_and_hasher(options.capacity, Default::default()),
            poisoned: FxHashSet::default(),
            stats: SessionStats::default(),
            history: Vec::new(),
            options,
        }
    }

    /// Create a builder for session configuration
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Options this session was built with
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Evaluate one lock request
    ///
    /// Total over its inputs: any pair of ids and either mode yields exactly
    /// one verdict. May change the item's state and may poison `txn`.
    pub fn evaluate(
        &mut self,
        txn: impl Into<TxnId>,
        item: impl Into<ItemId>,
        mode: LockMode,
    ) -> Verdict {
        let txn = txn.into();
        let item = item.into();

        let verdict = if self.poisoned.contains(&txn) {
            Verdict::Ignored
        } else {
            match mode {
                LockMode::Shared => self.request_shared(txn, item),
                LockMode::Exclusive => self.request_exclusive(txn, item),
            }
        };

        if verdict.is_denied() {
            self.poisoned.insert(txn);
            debug!(txn = txn.0, item = item.0, mode = %mode, "transaction poisoned");
        }

        self.stats.record(verdict);
        if self.options.record_history {
            self.history.push(Decision {
                request: LockRequest { mode, txn, item },
                verdict,
            });
        }

        trace!(txn = txn.0, item = item.0, mode = %mode, verdict = %verdict, "evaluated lock request");
        verdict
    }

    /// Evaluate a [`LockRequest`]
    pub fn submit(&mut self, request: LockRequest) -> Verdict {
        self.evaluate(request.txn, request.item, request.mode)
    }

    /// Evaluate requests in order, returning one verdict per request
    pub fn evaluate_all<I>(&mut self, requests: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = LockRequest>,
    {
        requests.into_iter().map(|req| self.submit(req)).collect()
    }

    fn request_shared(&mut self, txn: TxnId, item: ItemId) -> Verdict {
        // Every non-exclusive outcome grants, so the entry always ends up Shared
        let state = self.locks.entry(item).or_default();
        match state {
            LockState::Exclusive { owner } if *owner == txn => Verdict::Granted,
            LockState::Exclusive { .. } => Verdict::Denied,
            LockState::Shared { holders } => {
                if !holders.contains(&txn) {
                    holders.push(txn);
                }
                Verdict::Granted
            }
            LockState::Unlocked => {
                *state = LockState::shared(txn);
                Verdict::Granted
            }
        }
    }

    fn request_exclusive(&mut self, txn: TxnId, item: ItemId) -> Verdict {
        let Some(state) = self.locks.get_mut(&item) else {
            return Verdict::Denied;
        };

        match state {
            LockState::Unlocked => Verdict::Denied,
            LockState::Shared { .. } => {
                if state.sole_shared_holder() != Some(txn) {
                    return Verdict::Denied;
                }
                *state = LockState::exclusive(txn);
                self.stats.upgrades += 1;
                debug!(txn = txn.0, item = item.0, "upgraded shared lock to exclusive");
                Verdict::Granted
            }
            LockState::Exclusive { owner } => {
                let previous = std::mem::replace(owner, txn);
                if previous != txn {
                    self.stats.reassignments += 1;
                    debug!(
                        txn = txn.0,
                        item = item.0,
                        previous_owner = previous.0,
                        "reassigned exclusive lock"
                    );
                }
                Verdict::Granted
            }
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Current state of `item`
    ///
    /// Items never locked report `Unlocked`. Does not touch the lock table.
    pub fn lock_state(&self, item: impl Into<ItemId>) -> &LockState {
        self.locks.get(&item.into()).unwrap_or(&UNLOCKED)
    }

    /// Mode in which `txn` currently holds `item`, if at all
    pub fn holds(&self, txn: impl Into<TxnId>, item: impl Into<ItemId>) -> Option<LockMode> {
        let txn = txn.into();
        let state = self.lock_state(item);
        state.mode().filter(|_| state.is_held_by(txn))
    }

    /// Check if `txn` has been denied in this session
    pub fn is_poisoned(&self, txn: impl Into<TxnId>) -> bool {
        self.poisoned.contains(&txn.into())
    }

    /// Poisoned transactions, in no particular order
    pub fn poisoned(&self) -> impl Iterator<Item = TxnId> + '_ {
        self.poisoned.iter().copied()
    }

    /// Number of items held in any mode
    pub fn locked_items(&self) -> usize {
        self.locks.values().filter(|s| !s.is_unlocked()).count()
    }

    /// Verdict counters so far
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Every decision in evaluation order
    ///
    /// Empty unless the session was built with `record_history`.
    pub fn history(&self) -> &[Decision] {
        &self.history
    }

    /// Sorted, serializable copy of the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        let items: BTreeMap<ItemId, LockState> = self
            .locks
            .iter()
            .filter(|(_, state)| !state.is_unlocked())
            .map(|(item, state)| (*item, state.clone()))
            .collect();

        let mut poisoned: Vec<TxnId> = self.poisoned.iter().copied().collect();
        poisoned.sort_unstable();

        SessionSnapshot {
            items,
            poisoned,
            stats: self.stats,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
