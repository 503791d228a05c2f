//! # Lockgrant
//!
//! Deterministic simulator of a two-mode (shared / exclusive) lock manager.
//!
//! A [`LockSession`] holds the lock table for one dataset and answers each
//! request with `GRANTED`, `DENIED` or `IGNORE`. A transaction that is denied
//! once is *poisoned*: every later request it makes in the same session is
//! ignored without being evaluated.
//!
//! ## Quick Start
//!
//! ```
//! use lockgrant::prelude::*;
//!
//! let mut session = lockgrant::new_session();
//!
//! let verdicts = session.evaluate_all([
//!     lockgrant::request("S", 1, 100)?,
//!     lockgrant::request("X", 1, 100)?,
//!     lockgrant::request("S", 2, 100)?,
//! ]);
//! let text: Vec<String> = verdicts.iter().map(|v| v.to_string()).collect();
//! assert_eq!(text, ["GRANTED", "GRANTED", "DENIED"]);
//! # Ok::<(), lockgrant::Error>(())
//! ```
//!
//! ## Datasets
//!
//! Sessions share nothing. Create one per dataset and drop it when the
//! dataset ends; separate sessions can live on separate threads.

#![warn(missing_docs)]

mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use lockgrant_concurrency::{LockSession, SessionBuilder, SessionOptions};

// Re-export types
pub use types::*;

/// Allocate a fresh, empty session with default options.
pub fn new_session() -> LockSession {
    LockSession::new()
}

/// Build a request from a textual mode symbol (`S` or `X`).
///
/// # Errors
///
/// [`Error::InvalidMode`] if `mode` is not exactly `S` or `X`.
pub fn request(mode: &str, txn: i64, item: i64) -> Result<LockRequest> {
    let mode: LockMode = mode.parse()?;
    Ok(LockRequest::new(mode, txn, item))
}

/// Parse a verdict from its canonical text.
pub fn parse_verdict(text: &str) -> Result<Verdict> {
    Ok(text.parse()?)
}
