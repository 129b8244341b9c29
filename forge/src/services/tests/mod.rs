//! Service-specific tests
//!
//! Each service has its own test file; shared fixtures live in `common`.

#[cfg(test)]
mod queue;

#[cfg(test)]
pub mod common {
    use std::time::Duration;

    use crate::types::{NameEntry, NamePosition, OfflineDataset, TypeLabel};
    use shared::{GenerationMethod, NamesOptions};

    /// Upper bound for any single awaited operation in service tests
    pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn entry(category: &str, text: &str, gender: &str, weight: f64, position: NamePosition) -> NameEntry {
        NameEntry {
            category: category.to_string(),
            text: text.to_string(),
            gender: gender.to_string(),
            weight,
            position,
        }
    }

    pub fn first(category: &str, text: &str, gender: &str) -> NameEntry {
        entry(category, text, gender, 1.0, NamePosition::First)
    }

    /// Small dataset: six elf first names, two dwarf first names, one
    /// orc entry with only a last name
    pub fn test_dataset() -> OfflineDataset {
        OfflineDataset {
            names: vec![
                first("elf", "Aelar", "male"),
                first("elf", "Erevan", "male"),
                first("elf", "Varis", "male"),
                first("elf", "Enna", "female"),
                first("elf", "Sariel", "female"),
                first("Elf", "Naivara", "female"),
                entry("elf", "Galanodel", "", 1.0, NamePosition::Last),
                first("dwarf", "Thorin", "male"),
                first("dwarf", "Vistra", "female"),
                entry("orc", "Bloodtusk", "", 1.0, NamePosition::Last),
            ],
            types: vec![
                TypeLabel {
                    id: "elf".to_string(),
                    text: "Elf".to_string(),
                },
                TypeLabel {
                    id: "dwarf".to_string(),
                    text: "Dwarf".to_string(),
                },
            ],
        }
    }

    pub fn names_options(category: &str) -> NamesOptions {
        NamesOptions {
            quantity: 1,
            method: GenerationMethod::Ai,
            category: category.to_string(),
            genre: "fantasy".to_string(),
            gender: String::new(),
            language: None,
        }
    }
}
