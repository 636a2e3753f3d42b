//! Spaces Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validated
//! space deletion, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           spaces-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (DeleteSpaceService, PlayNextService)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: SpaceStore, Playback)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    spaces-adapters (Infrastructure)     │
//! │ (InMemorySpaceStore, JsonFileSpaceStore)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Space, DeletionPolicy, VideoId)      │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use spaces_core::prelude::*;
//!
//! // Any adapter implementing the driven port will do.
//! struct NoSpaces;
//!
//! impl SpaceStore for NoSpaces {
//!     fn fetch_by_id(&self, _id: &SpaceId) -> Option<Space> {
//!         None
//!     }
//!
//!     fn remove_by_id(&self, _id: &SpaceId) -> Result<(), StoreError> {
//!         Ok(())
//!     }
//! }
//!
//! let service = DeleteSpaceService::new(Box::new(NoSpaces));
//! let err = service
//!     .delete(&SpaceId::from("unknown-space"), &UserId::from("known-owner"))
//!     .unwrap_err();
//!
//! assert_eq!(err.kind(), DeletionErrorKind::NotFound);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DeleteSpaceService, PlayNextService, StoreError,
        ports::{PlaybackStore, SpaceStore},
    };
    pub use crate::domain::{
        DEFAULT_SPACE_NAME, DeletionError, DeletionErrorKind, DeletionPolicy, DomainError,
        ResourceId, Space, SpaceBuilder, SpaceId, UserId, VideoId,
    };
    pub use crate::error::{CoreError, CoreResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
