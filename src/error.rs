//! Unified error types for Lockgrant.
//!
//! Lock evaluation never fails; these errors only come from the textual and
//! serialized edges of the API.

use thiserror::Error;

/// All Lockgrant errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown lock mode symbol
    #[error("invalid lock mode: {0}")]
    InvalidMode(String),

    /// Unknown verdict text
    #[error("invalid verdict: {0}")]
    InvalidVerdict(String),

    /// Snapshot encoding or decoding failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for Lockgrant operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from parsing a mode or verdict.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::InvalidMode(_) | Error::InvalidVerdict(_))
    }
}

// Convert from internal core errors
impl From<lockgrant_core::Error> for Error {
    fn from(e: lockgrant_core::Error) -> Self {
        use lockgrant_core::Error as CoreError;
        match e {
            CoreError::InvalidMode(symbol) => Error::InvalidMode(symbol),
            CoreError::InvalidVerdict(text) => Error::InvalidVerdict(text),
            CoreError::Serialization(msg) => Error::Serialization(msg),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
