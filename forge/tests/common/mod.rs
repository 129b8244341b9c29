//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the forge integration tests.

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{CapturedBodies, ForgeBuilder, TestHelpers};
