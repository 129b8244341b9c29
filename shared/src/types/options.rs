//! Generation options supplied by callers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::homebrew::HomebrewField;
use super::Endpoint;
use crate::errors::SharedError;

/// How names are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    /// Ask the remote generator
    #[default]
    Ai,
    /// Sample the bundled offline word list
    Simple,
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMethod::Ai => write!(f, "ai"),
            GenerationMethod::Simple => write!(f, "simple"),
        }
    }
}

impl std::str::FromStr for GenerationMethod {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ai" => Ok(GenerationMethod::Ai),
            "simple" | "offline" => Ok(GenerationMethod::Simple),
            _ => Err(SharedError::UnknownVariant {
                kind: "generation method",
                value: s.to_string(),
            }),
        }
    }
}

/// Recognized description length tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    Medium,
    Extensive,
}

impl LengthTier {
    /// Parse a tier name; unknown names yield `None` rather than an error
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Some(LengthTier::Short),
            "medium" => Some(LengthTier::Medium),
            "extensive" => Some(LengthTier::Extensive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::Extensive => "extensive",
        }
    }
}

/// Options for name generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamesOptions {
    pub quantity: u32,
    #[serde(default)]
    pub method: GenerationMethod,
    /// What is being named, e.g. `elf` or `tavern`
    #[serde(rename = "type")]
    pub category: String,
    pub genre: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Options for description generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionOptions {
    /// Name of the described thing; empty lets the generator invent one
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub genre: String,
    #[serde(default)]
    pub style: String,
    /// Length tier name, see [`LengthTier`]
    #[serde(default)]
    pub length: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Target TTRPG system, e.g. `Pathfinder`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// Options for structured homebrew generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomebrewOptions {
    /// Schema name, e.g. `Magic Item`
    pub name: String,
    /// Name of the generated thing; empty lets the generator invent one
    #[serde(default)]
    pub custom_name: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<HomebrewField>,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub length: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// Any request the generation pipeline can service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GenerationOptions {
    Names(NamesOptions),
    Description(DescriptionOptions),
    Homebrew(HomebrewOptions),
}

impl GenerationOptions {
    /// Endpoint a remote generation of these options targets
    pub fn endpoint(&self) -> Endpoint {
        match self {
            GenerationOptions::Names(_) => Endpoint::Names,
            GenerationOptions::Description(_) => Endpoint::Description,
            GenerationOptions::Homebrew(_) => Endpoint::Homebrew,
        }
    }
}

impl From<NamesOptions> for GenerationOptions {
    fn from(options: NamesOptions) -> Self {
        GenerationOptions::Names(options)
    }
}

impl From<DescriptionOptions> for GenerationOptions {
    fn from(options: DescriptionOptions) -> Self {
        GenerationOptions::Description(options)
    }
}

impl From<HomebrewOptions> for GenerationOptions {
    fn from(options: HomebrewOptions) -> Self {
        GenerationOptions::Homebrew(options)
    }
}
