//! HTTP implementation of the remote call collaborator

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use shared::{ApiFailure, Endpoint};
use crate::config::ForgeConfig;
use crate::error::{ForgeError, ForgeResult};
use crate::traits::RemoteCall;

/// Route prefix the generation endpoints live under
pub const DEFAULT_ROUTE_PREFIX: &str = "/forge";

/// Real remote call backed by reqwest
pub struct RealRemoteCall {
    client: reqwest::Client,
    api_url: String,
    route_prefix: String,
    timeout: Duration,
}

impl RealRemoteCall {
    /// Create a client for the API rooted at `api_url`
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            timeout,
        }
    }

    /// Create a client from configuration; fails when no API URL is set
    pub fn from_config(config: &ForgeConfig) -> ForgeResult<Self> {
        let api_url = config
            .api_url
            .as_deref()
            .ok_or_else(|| ForgeError::config("FORGE_API_URL must be set for AI generation"))?;

        Ok(Self::new(api_url, config.timeout).with_route_prefix(&config.route_prefix))
    }

    pub fn with_route_prefix(mut self, prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        self.route_prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{prefix}")
        };
        self
    }

    /// Full URL for an endpoint
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}{}", self.api_url, self.route_prefix, endpoint.path())
    }
}

#[async_trait]
impl RemoteCall for RealRemoteCall {
    async fn call(&self, endpoint: Endpoint, body: Value, auth_token: &str) -> Result<Value, ApiFailure> {
        let url = self.url_for(endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("auth", auth_token)
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiFailure::Timeout
                } else {
                    ApiFailure::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        match status.as_u16() {
            401 => return Err(ApiFailure::Unauthorized),
            429 => return Err(ApiFailure::QuotaExceeded),
            _ => {}
        }

        // Error statuses may still carry a `success: false` envelope
        match response.json::<Value>().await {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(ApiFailure::ServerError(status.as_u16())),
            Err(e) if e.is_timeout() => Err(ApiFailure::Timeout),
            Err(e) => Err(ApiFailure::InvalidResponse(format!("Failed to parse response: {e}"))),
        }
    }
}
