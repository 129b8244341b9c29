//! Generated content returned to callers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::homebrew::HomebrewField;

/// Output of the names endpoint or the offline sampler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Names {
    pub names: Vec<String>,
}

/// Output of the description endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub description: String,
}

/// Raw homebrew output as sent by the remote generator.
///
/// `fields` is keyed loosely; it is matched back to the requested fields
/// by normalized key before reaching callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomebrewResponse {
    pub name: String,
    #[serde(default)]
    pub flavor_text: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Reconciled homebrew object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homebrew {
    /// Schema name the object was generated from
    pub name: String,
    /// Name of the generated thing
    pub custom_name: String,
    pub flavor_text: String,
    /// Requested fields in request order; fields the response omitted are absent
    pub fields: Vec<HomebrewField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "output", rename_all = "lowercase")]
pub enum GeneratedResult {
    Names(Names),
    Description(Description),
    Homebrew(Homebrew),
}

impl GeneratedResult {
    pub fn as_names(&self) -> Option<&Names> {
        match self {
            GeneratedResult::Names(names) => Some(names),
            _ => None,
        }
    }

    pub fn as_description(&self) -> Option<&Description> {
        match self {
            GeneratedResult::Description(description) => Some(description),
            _ => None,
        }
    }

    pub fn as_homebrew(&self) -> Option<&Homebrew> {
        match self {
            GeneratedResult::Homebrew(homebrew) => Some(homebrew),
            _ => None,
        }
    }
}
