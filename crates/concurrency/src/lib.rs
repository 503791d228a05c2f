//! Lock session layer
//!
//! This crate implements the per-dataset lock manager:
//! - LockSession: evaluates shared/exclusive requests in call order
//! - Poisoned transactions: a denied transaction is ignored from then on
//! - SessionOptions / SessionBuilder: allocation and audit settings
//! - SessionStats, decision history and JSON snapshots for inspection

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod history;
pub mod options;
pub mod session;
pub mod snapshot;
pub mod stats;

pub use history::Decision;
pub use options::{SessionBuilder, SessionOptions};
pub use session::LockSession;
pub use snapshot::SessionSnapshot;
pub use stats::SessionStats;

// Re-export the core vocabulary for convenience
pub use lockgrant_core::{ItemId, LockMode, LockRequest, LockState, TxnId, Verdict};
