//! Forge-specific data types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body sent to the names endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamesRequest {
    pub prompt: String,
}

/// Body sent to the description endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRequest {
    pub prompt: String,
}

/// Body sent to the homebrew endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomebrewRequest {
    pub prompt: String,
    /// Response schema the generator must conform to
    pub homebrew: Value,
}

/// Slot a name occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePosition {
    First,
    Last,
}

impl fmt::Display for NamePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePosition::First => write!(f, "first"),
            NamePosition::Last => write!(f, "last"),
        }
    }
}

/// One weighted entry of the offline names dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameEntry {
    #[serde(rename = "type")]
    pub category: String,
    pub text: String,
    #[serde(default)]
    pub gender: String,
    pub weight: f64,
    pub position: NamePosition,
}

/// Display label for a dataset type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLabel {
    pub id: String,
    pub text: String,
}

/// The offline names dataset as bundled with the crate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfflineDataset {
    pub names: Vec<NameEntry>,
    #[serde(default)]
    pub types: Vec<TypeLabel>,
}
