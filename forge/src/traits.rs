//! Forge trait definitions for dependency injection

use async_trait::async_trait;
use serde_json::Value;

use shared::{ApiFailure, Endpoint, GeneratedResult, GenerationOptions};
use crate::error::ForgeResult;
use crate::types::OfflineDataset;

/// Transport to the remote generation API
#[mockall::automock]
#[async_trait]
pub trait RemoteCall: Send + Sync {
    /// POST `body` to `endpoint` with the auth token attached and return the
    /// decoded JSON envelope. Owns its own timeout.
    async fn call(&self, endpoint: Endpoint, body: Value, auth_token: &str) -> Result<Value, ApiFailure>;
}

/// Supplies the opaque credential attached to every remote call
#[mockall::automock]
pub trait AuthSource: Send + Sync {
    fn auth_token(&self) -> String;
}

/// Turns generation options into a result; this is what the queue drives
#[mockall::automock]
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, options: GenerationOptions) -> ForgeResult<GeneratedResult>;
}

/// Source of the offline names dataset
#[mockall::automock]
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    async fn load(&self) -> ForgeResult<OfflineDataset>;
}

/// Auth source backed by a fixed token
#[derive(Debug, Clone, Default)]
pub struct StaticAuth {
    token: String,
}

impl StaticAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl AuthSource for StaticAuth {
    fn auth_token(&self) -> String {
        self.token.clone()
    }
}
