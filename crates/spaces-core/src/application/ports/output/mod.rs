//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `spaces-adapters` crate provides implementations.

use crate::application::StoreError;
use crate::domain::{Space, SpaceId, VideoId};

#[cfg(test)]
use mockall::automock;

/// Port for space storage.
///
/// Implemented by:
/// - `spaces_adapters::space_store::InMemorySpaceStore` (testing, demos)
/// - `spaces_adapters::space_store::JsonFileSpaceStore` (persistent)
///
/// ## Design Notes
///
/// - Two capabilities only: the deletion workflow needs nothing else
/// - Absence is `None`, not an error
/// - Whether a removal is conditional (compare-and-delete) is up to the
///   adapter; the application makes no concurrency assumption
#[cfg_attr(test, automock)]
pub trait SpaceStore: Send + Sync {
    /// Current snapshot of the space with the given id, if any.
    fn fetch_by_id(&self, id: &SpaceId) -> Option<Space>;

    /// Remove the space with the given id.
    fn remove_by_id(&self, id: &SpaceId) -> Result<(), StoreError>;
}

/// Port for playlist lookups.
///
/// Implemented by:
/// - `spaces_adapters::playlist::InMemoryPlaylist`
#[cfg_attr(test, automock)]
pub trait PlaybackStore: Send + Sync {
    /// Whether the user has play-next turned on.
    fn is_play_next_enabled(&self) -> bool;

    /// The video queued after `current`, if there is one.
    fn next_after(&self, current: &VideoId) -> Option<VideoId>;
}
