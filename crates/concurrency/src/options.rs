//! Session configuration
//!
//! Options only affect allocation and bookkeeping. They never change the
//! verdict of any request.

use crate::session::LockSession;

/// Lock session options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Number of items to pre-allocate room for in the lock table
    pub capacity: usize,
    /// Keep an ordered log of every decision
    pub record_history: bool,
}

impl SessionOptions {
    /// Options that record every decision for later inspection
    pub fn auditing() -> Self {
        SessionOptions {
            record_history: true,
            ..Default::default()
        }
    }
}

/// Builder for [`LockSession`]
///
/// # Example
///
/// ```
/// use lockgrant_concurrency::LockSession;
///
/// let session = LockSession::builder()
///     .capacity(1024)
///     .record_history()
///     .build();
/// assert!(session.options().record_history);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    options: SessionOptions,
}

impl SessionBuilder {
    /// Create a builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate the lock table for `items` items
    pub fn capacity(mut self, items: usize) -> Self {
        self.options.capacity = items;
        self
    }

    /// Record every decision
    pub fn record_history(mut self) -> Self {
        self.options.record_history = true;
        self
    }

    /// Replace all options at once
    pub fn options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Build an empty session
    pub fn build(self) -> LockSession {
        LockSession::with_options(self.options)
    }
}
