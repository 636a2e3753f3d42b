//! Unified error handling for Spaces Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::StoreError;
use crate::domain::{DeletionError, DomainError};

/// Root error type for Spaces Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A deletion was refused or could not complete.
    #[error("Cannot delete space: {0}")]
    Deletion(#[from] DeletionError),

    /// A domain value could not be built.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A store adapter failed outside of a deletion.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Deletion(e) => e.suggestions(),
            Self::Domain(e) => e.suggestions(),
            Self::Store(StoreError::Persistence { reason }) => vec![
                format!("Could not write the data file: {}", reason),
                "Check that you have write permissions".into(),
            ],
            Self::Store(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Deletion(e) => match e {
                DeletionError::NotFound { .. } => ErrorCategory::NotFound,
                DeletionError::NotOwned { .. } => ErrorCategory::Forbidden,
                DeletionError::NotEmpty { .. } | DeletionError::ProtectedDefault { .. } => {
                    ErrorCategory::Conflict
                }
                DeletionError::RemovalFailed { .. } => ErrorCategory::Internal,
            },
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Store(_) => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Deletion(DeletionError::RemovalFailed { source, .. }) | Self::Store(source) => {
                source.is_transient()
            }
            _ => false,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Forbidden,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;
