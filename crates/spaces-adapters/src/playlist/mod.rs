//! Playlist adapters.

mod memory;

pub use memory::InMemoryPlaylist;
