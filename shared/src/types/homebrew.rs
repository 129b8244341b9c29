//! Homebrew field model and key normalization

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Normalize a field name into the key used on the wire.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`, then the result is
/// lower-cased. `"Hit Points"` and `"hit_points"` both map to `hit_points`.
pub fn slugify(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Kind of content a homebrew field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Short,
    Long,
    Number,
    Boolean,
}

impl FieldKind {
    /// JSON schema type the remote generator must produce
    pub fn json_type(&self) -> &'static str {
        match self {
            FieldKind::Short | FieldKind::Long => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
        }
    }

    /// Size hint shown next to the field in the prompt
    pub fn prompt_hint(&self) -> &'static str {
        match self {
            FieldKind::Short => "one sentence",
            FieldKind::Long => "short paragraph",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Short => write!(f, "short"),
            FieldKind::Long => write!(f, "long"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Scalar value carried by a homebrew field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Whether this value is of the shape the given kind declares
    pub fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Text(_), FieldKind::Short | FieldKind::Long)
                | (FieldValue::Number(_), FieldKind::Number)
                | (FieldValue::Boolean(_), FieldKind::Boolean)
        )
    }

    /// Convert a response scalar into a value for a field of `kind`.
    ///
    /// Obvious conversions are applied (numbers and booleans sent as strings).
    /// Anything else is carried through as received; a mismatch between the
    /// declared kind and the response is not reported.
    pub fn coerce(kind: FieldKind, raw: &Value) -> FieldValue {
        match (kind, raw) {
            (FieldKind::Short | FieldKind::Long, Value::String(s)) => FieldValue::Text(s.clone()),
            (FieldKind::Number, Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(n) => FieldValue::Number(n),
                Err(_) => FieldValue::Text(s.clone()),
            },
            (FieldKind::Boolean, Value::String(s)) => match s.trim().to_lowercase().as_str() {
                "true" => FieldValue::Boolean(true),
                "false" => FieldValue::Boolean(false),
                _ => FieldValue::Text(s.clone()),
            },
            (_, Value::Bool(b)) => FieldValue::Boolean(*b),
            (_, Value::Number(n)) => match n.as_f64() {
                Some(n) => FieldValue::Number(n),
                None => FieldValue::Text(n.to_string()),
            },
            (_, other) => FieldValue::Text(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Boolean(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One typed field of a homebrew schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomebrewField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub description: String,
    /// Pre-seeded value; `None` asks the generator to fill it in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl HomebrewField {
    pub fn new(name: impl Into<String>, kind: FieldKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Normalized key used to match this field against remote responses
    pub fn key(&self) -> String {
        slugify(&self.name)
    }
}
