//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "delete a space" or "pick the next video".

pub mod delete_space_service;
pub mod play_next_service;

pub use delete_space_service::DeleteSpaceService;
pub use play_next_service::PlayNextService;
