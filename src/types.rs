//! Public types for the Lockgrant API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Identifiers and requests
pub use lockgrant_core::{ItemId, LockRequest, TxnId};

// Modes, verdicts and per-item state
pub use lockgrant_core::{Holders, LockMode, LockState, Verdict};

// Session bookkeeping
pub use lockgrant_concurrency::{Decision, SessionSnapshot, SessionStats};
