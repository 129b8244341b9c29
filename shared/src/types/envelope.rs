//! Response envelope used by every remote generation endpoint

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::errors::{SharedError, SharedResult};

/// `{success: true, output}` or `{success: false, error}`
#[derive(Debug, Clone, PartialEq)]
pub enum ForgeResponse<T> {
    Success(T),
    Failure(String),
}

#[derive(Deserialize)]
struct RawEnvelope<T> {
    success: bool,
    output: Option<T>,
    error: Option<String>,
}

impl<T> ForgeResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ForgeResponse::Success(_))
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            ForgeResponse::Success(output) => Ok(output),
            ForgeResponse::Failure(error) => Err(error),
        }
    }
}

impl<T: DeserializeOwned> ForgeResponse<T> {
    /// Decode an envelope from an already parsed JSON body
    pub fn from_value(value: Value) -> SharedResult<Self> {
        serde_json::from_value(value).map_err(|e| SharedError::EnvelopeError {
            message: e.to_string(),
        })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ForgeResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        match (raw.success, raw.output) {
            (true, Some(output)) => Ok(ForgeResponse::Success(output)),
            (true, None) => Err(D::Error::missing_field("output")),
            (false, _) => Ok(ForgeResponse::Failure(raw.error.unwrap_or_default())),
        }
    }
}

impl<T: Serialize> Serialize for ForgeResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ForgeResponse", 2)?;
        match self {
            ForgeResponse::Success(output) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("output", output)?;
            }
            ForgeResponse::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}
