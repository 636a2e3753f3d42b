// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Spaces.
//!
//! This module contains pure business logic with no I/O. Fetching and
//! removing spaces happens through ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: A fetched `Space` is a read-only snapshot
//! - **Rich domain model**: The ownership/emptiness/default predicates live on `Space`
//!
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{DEFAULT_SPACE_NAME, Space, SpaceBuilder};

pub use error::{DeletionError, DeletionErrorKind, DomainError};

pub use value_objects::{ResourceId, SpaceId, UserId, VideoId};

pub use validation::DeletionPolicy;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn opaque_ids_accept_any_string() {
        assert_eq!(SpaceId::from("").as_str(), "");
        assert_eq!(UserId::from("known owner").to_string(), "known owner");
        assert_eq!(SpaceId::new(String::from("a")), SpaceId::from("a"));
    }

    #[test]
    fn video_id_rejects_empty_input() {
        assert_eq!(
            VideoId::parse(""),
            Err(DomainError::InvalidVideoId(String::new()))
        );
        assert_eq!(VideoId::parse("   ").map(String::from), Ok("   ".to_owned()));
        assert!("intro".parse::<VideoId>().is_ok());
    }

    #[test]
    fn video_id_serde_rejects_empty_string() {
        let ok: Result<VideoId, _> = serde_json::from_str("\"intro\"");
        assert!(ok.is_ok());

        let empty: Result<VideoId, _> = serde_json::from_str("\"\"");
        assert!(empty.is_err());
    }

    // ========================================================================
    // Space Tests
    // ========================================================================

    #[test]
    fn new_space_is_empty_and_not_default() {
        let space = Space::new("s1", "alice", "projects");
        assert!(space.is_empty());
        assert!(!space.is_the_default());
        assert!(space.is_owned_by(&UserId::from("alice")));
        assert!(!space.is_owned_by(&UserId::from("bob")));
    }

    #[test]
    fn default_for_marks_the_protected_space() {
        let space = Space::default_for("s1", "alice");
        assert_eq!(space.name(), DEFAULT_SPACE_NAME);
        assert!(space.is_the_default());
    }

    #[test]
    fn default_name_is_case_sensitive() {
        assert!(!Space::new("s1", "alice", "Default").is_the_default());
    }

    #[test]
    fn builder_requires_id_and_owner() {
        assert_eq!(
            Space::builder().owner("alice").build(),
            Err(DomainError::MissingRequiredField { field: "id" })
        );
        assert_eq!(
            Space::builder().id("s1").build(),
            Err(DomainError::MissingRequiredField { field: "owner" })
        );
    }

    #[test]
    fn builder_collects_resources() {
        let space = Space::builder()
            .id("s1")
            .owner("alice")
            .name("photos")
            .resource("r1")
            .resources(["r2", "r3"])
            .build()
            .unwrap();

        assert_eq!(space.resources().len(), 3);
        assert!(!space.is_empty());
    }

    // ========================================================================
    // Deletion Policy Tests
    // ========================================================================

    fn owner() -> UserId {
        UserId::from("known-owner")
    }

    #[test]
    fn policy_accepts_owned_empty_regular_space() {
        let space = Space::new("known-space", "known-owner", "x");
        assert_eq!(DeletionPolicy::check(&space, &owner()), Ok(()));
    }

    #[test]
    fn policy_rejects_foreign_space() {
        let space = Space::new("known-space", "someone-else", "x");
        let err = DeletionPolicy::check(&space, &owner()).unwrap_err();
        assert_eq!(err.kind(), DeletionErrorKind::NotOwned);
    }

    #[test]
    fn policy_rejects_non_empty_space() {
        let space = Space::builder()
            .id("known-space")
            .owner("known-owner")
            .name("x")
            .resource("r1")
            .build()
            .unwrap();

        assert_eq!(
            DeletionPolicy::check(&space, &owner()),
            Err(DeletionError::NotEmpty {
                id: SpaceId::from("known-space"),
                resources: 1,
            })
        );
    }

    #[test]
    fn policy_rejects_default_space() {
        let space = Space::default_for("known-space", "known-owner");
        let err = DeletionPolicy::check(&space, &owner()).unwrap_err();
        assert_eq!(err.kind(), DeletionErrorKind::ProtectedDefault);
    }

    #[test]
    fn ownership_is_checked_before_emptiness_and_default() {
        let space = Space::builder()
            .id("known-space")
            .owner("someone-else")
            .name(DEFAULT_SPACE_NAME)
            .resource("r1")
            .build()
            .unwrap();

        let err = DeletionPolicy::check(&space, &owner()).unwrap_err();
        assert_eq!(err.kind(), DeletionErrorKind::NotOwned);
    }

    #[test]
    fn emptiness_is_checked_before_default() {
        let space = Space::builder()
            .id("known-space")
            .owner("known-owner")
            .name(DEFAULT_SPACE_NAME)
            .resource("r1")
            .build()
            .unwrap();

        let err = DeletionPolicy::check(&space, &owner()).unwrap_err();
        assert_eq!(err.kind(), DeletionErrorKind::NotEmpty);
    }
}
