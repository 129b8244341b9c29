//! Shared error types for the Forge client

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid response envelope: {message}")]
    EnvelopeError { message: String },

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
