// ============================================================================
// domain/error.rs - DELETION AND DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::application::StoreError;
use crate::domain::value_objects::{SpaceId, UserId};

/// Why a space could not be deleted.
///
/// Exactly one variant is produced per failed deletion, and no two checks
/// share a variant. Branch on [`DeletionError::kind`], not on the message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeletionError {
    #[error("space '{id}' cannot be fetched")]
    NotFound { id: SpaceId },

    #[error("only owned spaces can be removed: '{id}' is not owned by '{acting_user}'")]
    NotOwned { id: SpaceId, acting_user: UserId },

    #[error("only empty spaces can be removed: '{id}' holds {resources} resource(s)")]
    NotEmpty { id: SpaceId, resources: usize },

    #[error("the default space cannot be removed: '{id}'")]
    ProtectedDefault { id: SpaceId },

    #[error("space '{id}' could not be removed")]
    RemovalFailed {
        id: SpaceId,
        #[source]
        source: StoreError,
    },
}

/// Fieldless discriminant of [`DeletionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeletionErrorKind {
    NotFound,
    NotOwned,
    NotEmpty,
    ProtectedDefault,
    RemovalFailed,
}

impl DeletionError {
    pub fn kind(&self) -> DeletionErrorKind {
        match self {
            Self::NotFound { .. } => DeletionErrorKind::NotFound,
            Self::NotOwned { .. } => DeletionErrorKind::NotOwned,
            Self::NotEmpty { .. } => DeletionErrorKind::NotEmpty,
            Self::ProtectedDefault { .. } => DeletionErrorKind::ProtectedDefault,
            Self::RemovalFailed { .. } => DeletionErrorKind::RemovalFailed,
        }
    }

    /// The space the failed deletion targeted.
    pub fn space_id(&self) -> &SpaceId {
        match self {
            Self::NotFound { id }
            | Self::NotOwned { id, .. }
            | Self::NotEmpty { id, .. }
            | Self::ProtectedDefault { id }
            | Self::RemovalFailed { id, .. } => id,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { id } => vec![
                format!("No space with id '{}' exists", id),
                "Try: spaces list to see available spaces".into(),
            ],
            Self::NotOwned { acting_user, .. } => vec![
                format!("'{}' can only remove their own spaces", acting_user),
                "Try: spaces list --owner <USER> to see who owns what".into(),
            ],
            Self::NotEmpty { resources, .. } => vec![
                format!("Move or delete the {} remaining resource(s) first", resources),
            ],
            Self::ProtectedDefault { .. } => vec![
                "Every user keeps exactly one default space".into(),
                "Rename another space instead of removing this one".into(),
            ],
            Self::RemovalFailed { source, .. } => vec![
                format!("The store reported: {}", source),
                "No precondition failed; retrying may succeed".into(),
            ],
        }
    }
}

/// Errors raised when building domain values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid video id: '{0}'")]
    InvalidVideoId(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidVideoId(_) => vec![
                "A video id cannot be empty".into(),
                "Example: spaces play-next intro-video".into(),
            ],
            Self::MissingRequiredField { field } => vec![format!("Provide a value for '{}'", field)],
        }
    }
}
