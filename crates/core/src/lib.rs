//! Core types for the lock-grant simulator
//!
//! This crate defines the vocabulary shared by every layer:
//! - [`TxnId`] / [`ItemId`]: opaque requester and resource identifiers
//! - [`LockMode`]: the two requestable modes (Shared, Exclusive)
//! - [`Verdict`]: the outcome of evaluating one request
//! - [`LockState`]: the per-item lock state machine
//! - [`LockRequest`]: a single (transaction, mode, item) request

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod mode;
pub mod state;
pub mod types;

pub use error::{Error, Result};
pub use mode::{LockMode, Verdict};
pub use state::{Holders, LockState};
pub use types::{ItemId, LockRequest, TxnId};
