//! Randomized invariant checks over arbitrary request sequences.

use lockgrant::prelude::*;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Small id ranges so that requests collide on items and transactions.
fn arb_request() -> impl Strategy<Value = LockRequest> {
    (any::<bool>(), 0i64..6, 0i64..4).prop_map(|(shared, txn, item)| {
        if shared {
            LockRequest::shared(txn, item)
        } else {
            LockRequest::exclusive(txn, item)
        }
    })
}

fn arb_requests() -> impl Strategy<Value = Vec<LockRequest>> {
    prop::collection::vec(arb_request(), 0..64)
}

proptest! {
    #[test]
    fn denied_transactions_are_ignored_forever(requests in arb_requests()) {
        let mut session = LockSession::new();
        let mut denied: HashSet<TxnId> = HashSet::new();

        for req in requests {
            let verdict = session.submit(req);
            if denied.contains(&req.txn) {
                prop_assert_eq!(verdict, Verdict::Ignored);
            } else {
                prop_assert_ne!(verdict, Verdict::Ignored);
            }
            if verdict == Verdict::Denied {
                denied.insert(req.txn);
            }
            prop_assert_eq!(session.is_poisoned(req.txn), denied.contains(&req.txn));
        }
    }

    #[test]
    fn distinct_shared_requests_all_granted(txns in prop::collection::hash_set(any::<i64>(), 1..16)) {
        let mut session = LockSession::new();
        for txn in &txns {
            prop_assert_eq!(session.evaluate(*txn, 1, LockMode::Shared), Verdict::Granted);
        }
        prop_assert_eq!(session.lock_state(1).holders().len(), txns.len());
    }

    #[test]
    fn exclusive_denied_with_two_or_more_holders(
        holders in prop::collection::hash_set(0i64..100, 2..8),
        requester in 0i64..100,
    ) {
        let mut session = LockSession::new();
        for txn in &holders {
            session.evaluate(*txn, 7, LockMode::Shared);
        }
        prop_assert_eq!(session.evaluate(requester, 7, LockMode::Exclusive), Verdict::Denied);
        prop_assert!(session.is_poisoned(requester));
        prop_assert_eq!(session.lock_state(7).mode(), Some(LockMode::Shared));
    }

    #[test]
    fn sole_holder_upgrades_and_reenters(txn in any::<i64>(), item in any::<i64>()) {
        let mut session = LockSession::new();
        prop_assert_eq!(session.evaluate(txn, item, LockMode::Shared), Verdict::Granted);
        prop_assert_eq!(session.evaluate(txn, item, LockMode::Exclusive), Verdict::Granted);
        prop_assert_eq!(session.lock_state(item), &LockState::Exclusive { owner: TxnId(txn) });

        prop_assert_eq!(session.evaluate(txn, item, LockMode::Shared), Verdict::Granted);
        prop_assert_eq!(session.lock_state(item), &LockState::Exclusive { owner: TxnId(txn) });
    }

    #[test]
    fn exclusive_on_untouched_item_denied(requests in arb_requests(), txn in 10i64..20) {
        let mut session = LockSession::new();
        session.evaluate_all(requests);
        // Items 0..4 are the only ones the sequence can touch
        prop_assert_eq!(session.evaluate(txn, 1000, LockMode::Exclusive), Verdict::Denied);
    }

    #[test]
    fn item_states_only_move_forward(requests in arb_requests()) {
        let mut session = LockSession::new();
        let mut seen_exclusive: HashSet<ItemId> = HashSet::new();
        let mut holder_counts: HashMap<ItemId, usize> = HashMap::new();

        for req in requests {
            session.submit(req);
            for item in (0..4).map(ItemId) {
                match session.lock_state(item) {
                    LockState::Unlocked => {
                        prop_assert!(!seen_exclusive.contains(&item));
                        prop_assert!(!holder_counts.contains_key(&item));
                    }
                    LockState::Shared { holders } => {
                        prop_assert!(!seen_exclusive.contains(&item));
                        prop_assert!(!holders.is_empty());
                        let unique: HashSet<_> = holders.iter().collect();
                        prop_assert_eq!(unique.len(), holders.len());

                        let previous = holder_counts.insert(item, holders.len()).unwrap_or(0);
                        prop_assert!(holders.len() >= previous);
                    }
                    LockState::Exclusive { .. } => {
                        seen_exclusive.insert(item);
                    }
                }
            }
        }
    }

    #[test]
    fn grants_never_go_to_poisoned_transactions(requests in arb_requests()) {
        let mut session = LockSession::builder().record_history().build();
        session.evaluate_all(requests);

        let mut poisoned: HashSet<TxnId> = HashSet::new();
        for decision in session.history() {
            if decision.verdict == Verdict::Granted {
                prop_assert!(!poisoned.contains(&decision.request.txn));
            }
            if decision.verdict == Verdict::Denied {
                poisoned.insert(decision.request.txn);
            }
        }

        let stats = session.stats();
        prop_assert_eq!(stats.total() as usize, session.history().len());
        prop_assert_eq!(stats.denied as usize, poisoned.len());
    }
}
