//! Matching a loosely keyed homebrew response back onto the requested fields

use serde_json::{Map, Value};

use shared::{slugify, FieldValue, Homebrew, HomebrewField, HomebrewOptions, HomebrewResponse};

/// Re-populate `original` with values from `response_fields`.
///
/// Fields are visited in request order. For each one, the first response
/// key, in the order the remote sent them, whose slug equals the field's key supplies
/// the value. Fields with no matching key are dropped, so the result may be
/// shorter than the input. Response keys matching no field are ignored.
pub fn reconcile(original: &[HomebrewField], response_fields: &Map<String, Value>) -> Vec<HomebrewField> {
    original
        .iter()
        .filter_map(|field| {
            let key = field.key();
            response_fields
                .iter()
                .find(|(candidate, _)| slugify(candidate) == key)
                .map(|(_, raw)| HomebrewField {
                    value: Some(FieldValue::coerce(field.kind, raw)),
                    ..field.clone()
                })
        })
        .collect()
}

/// Assemble the final homebrew object from the request and the raw response
pub fn reconcile_homebrew(options: &HomebrewOptions, response: HomebrewResponse) -> Homebrew {
    let fields = reconcile(&options.fields, &response.fields);

    Homebrew {
        name: options.name.clone(),
        custom_name: response.name,
        flavor_text: response.flavor_text,
        fields,
    }
}
