//! Application layer for Spaces.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DeleteSpaceService, PlayNextService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Failures reported by the driven adapters
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. The deletion rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DeleteSpaceService, PlayNextService};

pub use ports::{PlaybackStore, SpaceStore};

pub use error::StoreError;
