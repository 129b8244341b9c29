//! Forge error types

use shared::{ApiFailure, Endpoint, FieldKind};
use std::fmt;
use thiserror::Error;

/// Result type for forge operations
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Generic message shown for any transport failure
pub const GENERIC_ERROR_TEXT: &str = "An error occurred while generating!";

/// A single validator rule that an input broke
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Empty,
    TooLong { max: usize },
    NotInChoices,
    TooSmall { min: String },
    TooLarge { max: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "is empty!"),
            Violation::TooLong { max } => write!(f, "is too long (max {max} characters)!"),
            Violation::NotInChoices => write!(f, "is not one of the allowed choices!"),
            Violation::TooSmall { min } => write!(f, "is too small (min {min})!"),
            Violation::TooLarge { max } => write!(f, "is too large (max {max})!"),
        }
    }
}

/// Rejected options, reported before any remote call is made
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Type is empty!")]
    EmptyType,

    #[error("Genre is empty!")]
    EmptyGenre,

    #[error("Name is empty!")]
    EmptyName,

    #[error("At least one field is required!")]
    NoFields,

    #[error("Field #{index} has no name!")]
    EmptyFieldName { index: usize },

    #[error("Fields \"{first}\" and \"{second}\" both normalize to \"{key}\"")]
    DuplicateFieldKey {
        first: String,
        second: String,
        key: String,
    },

    #[error("Field \"{field}\" is a {kind} field but its value is not")]
    ValueKindMismatch { field: String, kind: FieldKind },

    #[error("{field} {violation}")]
    Invalid {
        field: &'static str,
        violation: Violation,
    },
}

/// Forge error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Wrong API key!")]
    Auth,

    #[error("Your quota has been exceeded. Upgrade your plan to generate more {noun}!")]
    Quota { noun: &'static str },

    /// Network, timeout and parse failures; the reason is kept for diagnostics only
    #[error("An error occurred while generating!")]
    Transport { reason: ApiFailure },

    /// Error reported by the remote generator inside a well-formed envelope
    #[error("{message}")]
    Generation { message: String },

    #[error("Offline data could not be loaded")]
    DataUnavailable { reason: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Generation queue dropped the job before resolving it")]
    QueueClosed,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ForgeError {
    /// Map a remote call failure to the user-facing error for `endpoint`
    pub fn from_api_failure(failure: ApiFailure, endpoint: Endpoint) -> Self {
        match failure {
            ApiFailure::Unauthorized => ForgeError::Auth,
            ApiFailure::QuotaExceeded => ForgeError::Quota { noun: endpoint.noun() },
            reason => ForgeError::Transport { reason },
        }
    }

    /// Wrap an error string carried by a `success: false` envelope
    pub fn from_remote_message(message: String) -> Self {
        if message.trim().is_empty() {
            ForgeError::Transport {
                reason: ApiFailure::InvalidResponse("empty error message".to_string()),
            }
        } else {
            ForgeError::Generation { message }
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ForgeError::ConfigError {
            message: message.into(),
        }
    }

    pub fn data_unavailable(reason: impl fmt::Display) -> Self {
        ForgeError::DataUnavailable {
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        ForgeError::SerializationError {
            message: err.to_string(),
        }
    }
}
