//! Infrastructure adapters for Spaces.
//!
//! This crate implements the ports defined in `spaces-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod playlist;
pub mod snapshot;
pub mod space_store;

// Re-export commonly used adapters
pub use playlist::InMemoryPlaylist;
pub use snapshot::{PlaylistRecord, Snapshot, SnapshotError};
pub use space_store::{InMemorySpaceStore, JsonFileSpaceStore};
