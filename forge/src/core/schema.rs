//! Response schema compilation for homebrew generation

use serde_json::{json, Map, Value};

use shared::HomebrewOptions;

use crate::core::validation::Validated;

/// Top-level properties every homebrew response must carry
pub const REQUIRED_PROPERTIES: [&str; 3] = ["name", "flavor_text", "fields"];

/// JSON-Schema-like description of the expected homebrew response
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDescriptor(Value);

impl SchemaDescriptor {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Normalized keys the `fields` object must contain, in field order
    pub fn field_keys(&self) -> Vec<&str> {
        self.0["properties"]["fields"]["required"]
            .as_array()
            .map(|keys| keys.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Build the response schema for a validated homebrew request.
///
/// Validation guarantees field keys are unique, so no property is
/// overwritten here.
pub fn compile_schema(options: &Validated<HomebrewOptions>) -> SchemaDescriptor {
    let mut properties = Map::new();
    let mut required = Vec::with_capacity(options.fields.len());

    for field in &options.fields {
        let key = field.key();
        properties.insert(
            key.clone(),
            json!({
                "title": field.name,
                "description": field.description,
                "type": field.kind.json_type(),
            }),
        );
        required.push(Value::String(key));
    }

    let name_description = if options.custom_name.is_empty() {
        "The name of the thing being generated".to_string()
    } else {
        format!(
            "The name of the thing being generated, already specified: {}",
            options.custom_name
        )
    };

    SchemaDescriptor(json!({
        "title": options.name,
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "name": {
                "title": "Name",
                "description": name_description,
                "type": "string"
            },
            "flavor_text": {
                "title": "Flavor Text",
                "description": "A short hint/flavor/subtitle to display below the title",
                "type": "string"
            },
            "fields": {
                "title": "Fields",
                "description": "The various fields to generate content for",
                "type": "object",
                "additionalProperties": false,
                "properties": properties,
                "required": required
            }
        },
        "required": REQUIRED_PROPERTIES
    }))
}
