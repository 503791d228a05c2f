//! Error types for the core crate
//!
//! Lock evaluation itself is total and never fails. Errors only arise at the
//! edges: parsing textual modes or verdicts and encoding snapshots.

use thiserror::Error;

/// Core error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lock mode symbol other than `S` or `X`
    #[error("invalid lock mode: {0:?} (expected \"S\" or \"X\")")]
    InvalidMode(String),

    /// A verdict string other than `GRANTED`, `DENIED` or `IGNORE`
    #[error("invalid verdict: {0:?}")]
    InvalidVerdict(String),

    /// Snapshot encoding or decoding failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
