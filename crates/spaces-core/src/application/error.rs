//! Application layer errors.
//!
//! These errors represent failures of the driven adapters, not business
//! rules. Rule violations are `DeletionError` from `crate::domain`.

use thiserror::Error;

use crate::domain::SpaceId;

/// Errors a store adapter may report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// The record disappeared between lookup and removal, or never existed.
    #[error("space '{id}' is not in the store")]
    NotFound { id: SpaceId },

    /// Store access failed (lock poisoned, etc.).
    #[error("Space store lock poisoned")]
    LockPoisoned,

    /// The change could not be written back to durable storage.
    #[error("Failed to persist store: {reason}")]
    Persistence { reason: String },

    /// The backing service refused or timed out.
    #[error("Space store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    /// Whether repeating the same call could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
