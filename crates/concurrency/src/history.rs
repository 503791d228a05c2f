//! Decision log entries

use lockgrant_core::{LockRequest, Verdict};
use serde::{Deserialize, Serialize};

/// One evaluated request and its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The request as submitted
    pub request: LockRequest,
    /// What the session decided
    pub verdict: Verdict,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.request, self.verdict)
    }
}
