//! Domain value objects: SpaceId, UserId, ResourceId, VideoId.
//!
//! # Design
//!
//! These are semantic wrappers around strings: equality-by-value, no
//! identity. `SpaceId`, `UserId` and `ResourceId` are opaque: any string is
//! accepted and meaning is resolved by lookup. `VideoId` is the exception, it
//! can only be built through [`VideoId::parse`].

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares an opaque string identifier with the usual conversions.
macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// ── Identifiers ──────────────────────────────────────────────────────────────

opaque_id! {
    /// Identifier of a [`Space`](crate::domain::Space). Unique per store.
    SpaceId
}

opaque_id! {
    /// Identifier of a user, either the owner of a space or the one acting on it.
    UserId
}

opaque_id! {
    /// Opaque handle to something held inside a space.
    ResourceId
}

// ── VideoId ──────────────────────────────────────────────────────────────────

/// Identifier of a video in a playlist.
///
/// Unlike the opaque ids above, an empty `VideoId` is meaningless, so the
/// only way in is [`VideoId::parse`] (or `FromStr`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Parse a raw id. Only the empty string is rejected.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::InvalidVideoId(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VideoId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VideoId {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}
