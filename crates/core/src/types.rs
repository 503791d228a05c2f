//! Identifier and request types
//!
//! - [`TxnId`]: names a requesting transaction
//! - [`ItemId`]: names a lockable data item
//! - [`LockRequest`]: one request as fed to a session

use crate::mode::LockMode;
use serde::{Deserialize, Serialize};

/// Identifier of a transaction issuing lock requests
///
/// Opaque: carries no attributes beyond identity.
///
/// # Examples
///
/// ```
/// use lockgrant_core::TxnId;
///
/// let t: TxnId = 7.into();
/// assert_eq!(t, TxnId(7));
/// assert_eq!(t.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxnId(pub i64);

impl From<i64> for TxnId {
    fn from(id: i64) -> Self {
        TxnId(id)
    }
}

impl std::fmt::Display for TxnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a lockable data item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single lock request
///
/// Field order follows the conventional `MODE TXN ITEM` request layout,
/// which is also how the request is displayed.
///
/// # Examples
///
/// ```
/// use lockgrant_core::{LockMode, LockRequest};
///
/// let req = LockRequest::shared(1, 100);
/// assert_eq!(req.mode, LockMode::Shared);
/// assert_eq!(req.to_string(), "S 1 100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockRequest {
    /// Requested mode
    pub mode: LockMode,
    /// Requesting transaction
    pub txn: TxnId,
    /// Target item
    pub item: ItemId,
}

impl LockRequest {
    /// Create a request
    pub fn new(mode: LockMode, txn: impl Into<TxnId>, item: impl Into<ItemId>) -> Self {
        Self {
            mode,
            txn: txn.into(),
            item: item.into(),
        }
    }

    /// Create a shared-mode request
    pub fn shared(txn: impl Into<TxnId>, item: impl Into<ItemId>) -> Self {
        Self::new(LockMode::Shared, txn, item)
    }

    /// Create an exclusive-mode request
    pub fn exclusive(txn: impl Into<TxnId>, item: impl Into<ItemId>) -> Self {
        Self::new(LockMode::Exclusive, txn, item)
    }
}

impl std::fmt::Display for LockRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.mode, self.txn, self.item)
    }
}
