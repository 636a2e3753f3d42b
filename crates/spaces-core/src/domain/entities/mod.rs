pub mod space;

pub use space::{DEFAULT_SPACE_NAME, Space, SpaceBuilder};
