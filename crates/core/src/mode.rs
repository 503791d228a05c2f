//! Lock modes and verdicts
//!
//! Both types have a canonical textual form used at the request/verdict
//! boundary:
//!
//! | Type | Variant | Text |
//! |------|---------|------|
//! | LockMode | Shared | `S` |
//! | LockMode | Exclusive | `X` |
//! | Verdict | Granted | `GRANTED` |
//! | Verdict | Denied | `DENIED` |
//! | Verdict | Ignored | `IGNORE` |

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Requested lock mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockMode {
    /// Compatible with other shared holders
    Shared,
    /// Single-owner mode
    Exclusive,
}

impl LockMode {
    /// Canonical one-letter symbol
    pub const fn as_str(&self) -> &'static str {
        match self {
            LockMode::Shared => "S",
            LockMode::Exclusive => "X",
        }
    }
}

impl std::fmt::Display for LockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockMode {
    type Err = Error;

    /// Parse `S` or `X`
    ///
    /// # Examples
    ///
    /// ```
    /// use lockgrant_core::LockMode;
    ///
    /// assert_eq!("S".parse::<LockMode>().unwrap(), LockMode::Shared);
    /// assert_eq!("X".parse::<LockMode>().unwrap(), LockMode::Exclusive);
    /// assert!("#".parse::<LockMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(LockMode::Shared),
            "X" => Ok(LockMode::Exclusive),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

/// Outcome of evaluating one lock request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The requester was already poisoned; the request was not evaluated
    Ignored,
    /// The lock was granted
    Granted,
    /// The lock was refused and the requester is now poisoned
    Denied,
}

impl Verdict {
    /// Canonical upper-case rendering
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::Ignored => "IGNORE",
            Verdict::Granted => "GRANTED",
            Verdict::Denied => "DENIED",
        }
    }

    /// Check if the lock was granted
    pub const fn is_granted(&self) -> bool {
        matches!(self, Verdict::Granted)
    }

    /// Check if the lock was denied
    pub const fn is_denied(&self) -> bool {
        matches!(self, Verdict::Denied)
    }

    /// Check if the request was skipped
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Verdict::Ignored)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GRANTED" => Ok(Verdict::Granted),
            "DENIED" => Ok(Verdict::Denied),
            "IGNORE" => Ok(Verdict::Ignored),
            other => Err(Error::InvalidVerdict(other.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
