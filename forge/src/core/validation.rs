//! Options validation.
//!
//! Validation never mutates the caller's options; it returns a normalized
//! copy wrapped in [`Validated`], which is the only input the prompt and
//! schema compilers accept.

use std::collections::HashMap;
use std::ops::Deref;

use shared::{DescriptionOptions, HomebrewField, HomebrewOptions, NamesOptions};

use crate::core::validator::{validate_number, validate_string};
use crate::error::ValidationError;

/// Largest batch of names a single request may ask for
pub const MAX_NAMES: u32 = 50;

/// Free-text notes are clipped to this many characters
pub const MAX_NOTES_LEN: usize = 2000;

/// Genre assumed for homebrew when none is given
pub const DEFAULT_HOMEBREW_GENRE: &str = "fantasy";

/// Options that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

pub trait Validate: Sized {
    fn validate(&self) -> Result<Validated<Self>, ValidationError>;
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn required(value: &str, err: ValidationError) -> Result<String, ValidationError> {
    validate_string(value).trim().required().finish("value").map_err(|_| err)
}

/// Over-long notes are cut down, never rejected
fn notes(value: &str) -> String {
    validate_string(value).trim().clip(MAX_NOTES_LEN).value().to_string()
}

impl Validate for NamesOptions {
    fn validate(&self) -> Result<Validated<Self>, ValidationError> {
        let category = required(&self.category, ValidationError::EmptyType)?;
        let genre = required(&self.genre, ValidationError::EmptyGenre)?;
        let quantity = validate_number(self.quantity).min_max(1, MAX_NAMES).finish("quantity")?;
        let gender = validate_string(self.gender.as_str()).trim().to_lower().value().to_string();

        Ok(Validated(NamesOptions {
            quantity,
            method: self.method,
            category,
            genre,
            gender,
            language: non_empty(&self.language),
        }))
    }
}

impl Validate for DescriptionOptions {
    fn validate(&self) -> Result<Validated<Self>, ValidationError> {
        let category = required(&self.category, ValidationError::EmptyType)?;
        let genre = required(&self.genre, ValidationError::EmptyGenre)?;

        Ok(Validated(DescriptionOptions {
            name: self.name.trim().to_string(),
            category,
            genre,
            style: self.style.trim().to_string(),
            length: self.length.trim().to_lowercase(),
            language: non_empty(&self.language),
            system: non_empty(&self.system),
            notes: notes(&self.notes),
        }))
    }
}

/// Check field names and pre-seeded values, and that no two field names
/// normalize to the same key.
fn validate_fields(fields: &[HomebrewField]) -> Result<Vec<HomebrewField>, ValidationError> {
    if fields.is_empty() {
        return Err(ValidationError::NoFields);
    }

    let mut seen: HashMap<String, String> = HashMap::new();
    let mut validated = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let name = field.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyFieldName { index });
        }

        if let Some(value) = &field.value {
            if !value.matches(field.kind) {
                return Err(ValidationError::ValueKindMismatch {
                    field: name,
                    kind: field.kind,
                });
            }
        }

        let normalized = HomebrewField {
            name,
            kind: field.kind,
            description: field.description.trim().to_string(),
            value: field.value.clone(),
        };

        let key = normalized.key();
        if let Some(first) = seen.get(&key) {
            return Err(ValidationError::DuplicateFieldKey {
                first: first.clone(),
                second: normalized.name,
                key,
            });
        }
        seen.insert(key, normalized.name.clone());
        validated.push(normalized);
    }

    Ok(validated)
}

impl Validate for HomebrewOptions {
    fn validate(&self) -> Result<Validated<Self>, ValidationError> {
        let name = required(&self.name, ValidationError::EmptyName)?;
        let fields = validate_fields(&self.fields)?;
        let genre = validate_string(self.genre.as_str())
            .trim()
            .default(DEFAULT_HOMEBREW_GENRE)
            .value()
            .to_string();

        Ok(Validated(HomebrewOptions {
            name,
            custom_name: self.custom_name.trim().to_string(),
            description: self.description.trim().to_string(),
            fields,
            genre,
            style: self.style.trim().to_string(),
            length: self.length.trim().to_lowercase(),
            language: non_empty(&self.language),
            system: non_empty(&self.system),
            notes: notes(&self.notes),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;
    use shared::{FieldKind, FieldValue, GenerationMethod};

    fn names(category: &str, genre: &str) -> NamesOptions {
        NamesOptions {
            quantity: 3,
            method: GenerationMethod::Simple,
            category: category.to_string(),
            genre: genre.to_string(),
            gender: "Female ".to_string(),
            language: Some("  ".to_string()),
        }
    }

    fn homebrew(fields: Vec<HomebrewField>) -> HomebrewOptions {
        HomebrewOptions {
            name: "Magic Item".to_string(),
            custom_name: String::new(),
            description: String::new(),
            fields,
            genre: String::new(),
            style: String::new(),
            length: String::new(),
            language: None,
            system: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_names_validation_normalizes_without_mutating() {
        let options = names("elf", "fantasy");
        let validated = options.validate().unwrap();

        assert_eq!(validated.gender, "female");
        assert_eq!(validated.language, None);
        assert_eq!(options.gender, "Female ");
    }

    #[test]
    fn test_names_rejects_empty_type_and_genre() {
        assert_eq!(names("", "fantasy").validate().unwrap_err(), ValidationError::EmptyType);
        assert_eq!(names("elf", " ").validate().unwrap_err(), ValidationError::EmptyGenre);
    }

    #[test]
    fn test_names_quantity_bounds() {
        let mut options = names("elf", "fantasy");
        options.quantity = 0;
        assert!(matches!(
            options.validate().unwrap_err(),
            ValidationError::Invalid {
                field: "quantity",
                violation: Violation::TooSmall { .. }
            }
        ));

        options.quantity = MAX_NAMES + 1;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_description_keeps_unknown_length() {
        let options = DescriptionOptions {
            name: " The Gilded Goose ".to_string(),
            category: "tavern".to_string(),
            genre: "fantasy".to_string(),
            style: String::new(),
            length: "Epic".to_string(),
            language: None,
            system: Some("".to_string()),
            notes: String::new(),
        };
        let validated = options.validate().unwrap();

        assert_eq!(validated.name, "The Gilded Goose");
        assert_eq!(validated.length, "epic");
        assert_eq!(validated.system, None);
    }

    #[test]
    fn test_long_notes_are_clipped_not_rejected() {
        let options = DescriptionOptions {
            name: String::new(),
            category: "tavern".to_string(),
            genre: "fantasy".to_string(),
            style: String::new(),
            length: String::new(),
            language: None,
            system: None,
            notes: format!("  {}  ", "x".repeat(MAX_NOTES_LEN + 1)),
        };
        let validated = options.validate().unwrap();
        assert_eq!(validated.notes.chars().count(), MAX_NOTES_LEN);

        let mut brew = homebrew(vec![HomebrewField::new("Rarity", FieldKind::Short, "")]);
        brew.notes = "é".repeat(MAX_NOTES_LEN + 500);
        let validated = brew.validate().unwrap();
        assert_eq!(validated.notes.chars().count(), MAX_NOTES_LEN);
    }

    #[test]
    fn test_homebrew_rejects_colliding_keys() {
        let options = homebrew(vec![
            HomebrewField::new("Hit Points", FieldKind::Number, "Maximum HP"),
            HomebrewField::new("hit_points", FieldKind::Number, "Current HP"),
        ]);

        assert_eq!(
            options.validate().unwrap_err(),
            ValidationError::DuplicateFieldKey {
                first: "Hit Points".to_string(),
                second: "hit_points".to_string(),
                key: "hit_points".to_string(),
            }
        );
    }

    #[test]
    fn test_homebrew_rejects_mistyped_seed_value() {
        let options = homebrew(vec![
            HomebrewField::new("Weight", FieldKind::Number, "").with_value(FieldValue::Text("heavy".into())),
        ]);

        assert!(matches!(
            options.validate().unwrap_err(),
            ValidationError::ValueKindMismatch { .. }
        ));
    }

    #[test]
    fn test_homebrew_defaults_genre_and_requires_fields() {
        assert_eq!(homebrew(vec![]).validate().unwrap_err(), ValidationError::NoFields);

        let validated = homebrew(vec![HomebrewField::new("Rarity", FieldKind::Short, "")])
            .validate()
            .unwrap();
        assert_eq!(validated.genre, DEFAULT_HOMEBREW_GENRE);
    }
}
