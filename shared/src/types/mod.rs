//! Core types used throughout the Forge client

pub mod envelope;
pub mod homebrew;
pub mod options;
pub mod results;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::SharedError;

pub use envelope::ForgeResponse;
pub use homebrew::{slugify, FieldKind, FieldValue, HomebrewField};
pub use options::{
    DescriptionOptions, GenerationMethod, GenerationOptions, HomebrewOptions, LengthTier, NamesOptions,
};
pub use results::{Description, GeneratedResult, Homebrew, HomebrewResponse, Names};

/// Unique identifier for a queued generation job
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remote generation endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Names,
    Description,
    Homebrew,
}

impl Endpoint {
    /// Path suffix appended to the API route prefix
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Names => "/names",
            Endpoint::Description => "/description",
            Endpoint::Homebrew => "/homebrew",
        }
    }

    /// Plural noun used in user-facing quota messages
    pub fn noun(&self) -> &'static str {
        match self {
            Endpoint::Names => "names",
            Endpoint::Description => "descriptions",
            Endpoint::Homebrew => "homebrew",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Names => write!(f, "names"),
            Endpoint::Description => write!(f, "description"),
            Endpoint::Homebrew => write!(f, "homebrew"),
        }
    }
}

impl std::str::FromStr for Endpoint {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('/').to_lowercase().as_str() {
            "names" => Ok(Endpoint::Names),
            "description" => Ok(Endpoint::Description),
            "homebrew" => Ok(Endpoint::Homebrew),
            _ => Err(SharedError::UnknownVariant {
                kind: "endpoint",
                value: s.to_string(),
            }),
        }
    }
}

/// Failure reported by the remote call collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiFailure {
    /// The remote rejected the auth token (HTTP 401)
    Unauthorized,
    /// The remote rejected the request due to plan limits (HTTP 429)
    QuotaExceeded,
    /// The request did not complete within the configured timeout
    Timeout,
    NetworkError(String),
    ServerError(u16),
    InvalidResponse(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Unauthorized => write!(f, "unauthorized"),
            ApiFailure::QuotaExceeded => write!(f, "quota exceeded"),
            ApiFailure::Timeout => write!(f, "request timed out"),
            ApiFailure::NetworkError(e) => write!(f, "network error: {e}"),
            ApiFailure::ServerError(status) => write!(f, "server error: HTTP {status}"),
            ApiFailure::InvalidResponse(e) => write!(f, "invalid response: {e}"),
        }
    }
}
