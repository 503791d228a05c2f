//! Convenient imports for Lockgrant.
//!
//! ```
//! use lockgrant::prelude::*;
//!
//! let mut session = LockSession::new();
//! assert_eq!(session.evaluate(1, 100, LockMode::Shared), Verdict::Granted);
//! ```

// Main entry point
pub use crate::{LockSession, SessionBuilder, SessionOptions};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{ItemId, LockMode, LockRequest, LockState, TxnId, Verdict};

// Inspection
pub use crate::types::{Decision, SessionSnapshot, SessionStats};
