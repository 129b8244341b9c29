//! Forge: content generation client for tabletop role-playing games
//!
//! Turns structured requests for names, descriptions and homebrew objects
//! into prompts and response schemas, sends them to the remote generator one
//! at a time, and reconciles the answers back into typed results. Names can
//! also be drawn offline from a bundled weighted dataset.

pub mod config;
pub mod core;
pub mod error;
pub mod forge_impl;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::ForgeConfig;
pub use crate::core::{compile_schema, reconcile, SchemaDescriptor, Validate, Validated};
pub use error::{ForgeError, ForgeResult, ValidationError};
pub use forge_impl::Forge;
pub use services::{ForgeQueue, OfflineNames, RealRemoteCall};
pub use traits::{AuthSource, DatasetLoader, Generator, RemoteCall, StaticAuth};
