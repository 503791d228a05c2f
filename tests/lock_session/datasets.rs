//! Independent datasets: one session each, no shared state.

use lockgrant::prelude::*;
use std::thread;

fn dataset(seed: i64) -> Vec<LockRequest> {
    vec![
        LockRequest::shared(seed, 1),
        LockRequest::shared(seed + 1, 1),
        LockRequest::exclusive(seed, 1),
        LockRequest::shared(seed, 2),
        LockRequest::shared(seed + 2, 3),
        LockRequest::exclusive(seed + 2, 3),
    ]
}

#[test]
fn test_poisoning_does_not_leak_between_sessions() {
    let mut first = LockSession::new();
    first.evaluate(1, 100, LockMode::Shared);
    first.evaluate(2, 100, LockMode::Exclusive);
    assert!(first.is_poisoned(2));

    let mut second = LockSession::new();
    assert!(!second.is_poisoned(2));
    assert!(second.lock_state(100).is_unlocked());
    assert_eq!(second.evaluate(2, 100, LockMode::Shared), Verdict::Granted);
}

#[test]
fn test_parallel_sessions_match_sequential() {
    let seeds: Vec<i64> = (0..8).map(|i| i * 10).collect();

    let sequential: Vec<Vec<Verdict>> = seeds
        .iter()
        .map(|seed| LockSession::new().evaluate_all(dataset(*seed)))
        .collect();

    let parallel: Vec<Vec<Verdict>> = thread::scope(|s| {
        let handles: Vec<_> = seeds
            .iter()
            .map(|seed| s.spawn(move || LockSession::new().evaluate_all(dataset(*seed))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
    assert_eq!(
        sequential[0],
        vec![
            Verdict::Granted,
            Verdict::Granted,
            Verdict::Denied,
            Verdict::Ignored,
            Verdict::Granted,
            Verdict::Granted,
        ]
    );
}

#[test]
fn test_session_moves_across_threads() {
    let mut session = LockSession::builder().capacity(16).build();
    session.evaluate(1, 1, LockMode::Shared);

    let session = thread::spawn(move || {
        session.evaluate(1, 1, LockMode::Exclusive);
        session
    })
    .join()
    .unwrap();

    assert_eq!(session.holds(1, 1), Some(LockMode::Exclusive));
    assert_eq!(session.stats().upgrades, 1);
}
