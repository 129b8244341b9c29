//! Runtime configuration
//!
//! Values are read from the process environment after loading a `.env` file
//! from the current directory or its parents, if one exists. Variables that
//! are already set take precedence over `.env` values.
//!
//! - `FORGE_API_URL`: base URL of the remote generation API
//! - `FORGE_AUTH_TOKEN`: credential sent in the `auth` header
//! - `FORGE_TIMEOUT_MS`: per-request timeout in milliseconds
//! - `FORGE_OFFLINE_NAMES`: path to a names dataset replacing the bundled one
//! - `FORGE_LOG_LEVEL`: default tracing level when `RUST_LOG` is unset

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ForgeError, ForgeResult};
use crate::services::http_client::DEFAULT_ROUTE_PREFIX;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ForgeConfig {
    pub api_url: Option<String>,
    pub route_prefix: String,
    pub auth_token: String,
    pub timeout: Duration,
    pub offline_names_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            auth_token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            offline_names_path: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ForgeConfig {
    /// Load from `.env` and the process environment
    pub fn from_env() -> ForgeResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ForgeResult<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        config.api_url = get("FORGE_API_URL");
        if let Some(token) = get("FORGE_AUTH_TOKEN") {
            config.auth_token = token;
        }
        if let Some(raw) = get("FORGE_TIMEOUT_MS") {
            let millis: u64 = raw
                .parse()
                .map_err(|_| ForgeError::config(format!("FORGE_TIMEOUT_MS must be a number of milliseconds, got '{raw}'")))?;
            config.set_timeout_ms(millis)?;
        }
        config.offline_names_path = get("FORGE_OFFLINE_NAMES").map(PathBuf::from);
        if let Some(level) = get("FORGE_LOG_LEVEL") {
            config.log_level = level.to_lowercase();
        }

        Ok(config)
    }

    /// Set the per-request timeout; zero would fail every request
    pub fn set_timeout_ms(&mut self, millis: u64) -> ForgeResult<()> {
        if millis == 0 {
            return Err(ForgeError::config("timeout must be greater than zero milliseconds"));
        }
        self.timeout = Duration::from_millis(millis);
        Ok(())
    }
}
