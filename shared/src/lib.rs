//! Shared types for the Forge content generation client
//!
//! Contains the value objects that cross the boundary between callers,
//! the generation pipeline and the remote generation API.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
