//! Space store adapters.

mod file;
mod memory;

pub use file::JsonFileSpaceStore;
pub use memory::InMemorySpaceStore;
