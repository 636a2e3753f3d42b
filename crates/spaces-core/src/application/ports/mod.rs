//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `spaces-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SpaceStore`: Fetch and remove spaces
//!   - `PlaybackStore`: Playlist lookups for the play-next use case
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The services themselves; the CLI drives them)

pub mod output;

pub use output::{PlaybackStore, SpaceStore};

#[cfg(test)]
pub use output::{MockPlaybackStore, MockSpaceStore};
