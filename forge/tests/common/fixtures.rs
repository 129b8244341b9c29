//! Option, dataset and envelope fixtures

use serde_json::{json, Value};

use forge::types::{NameEntry, NamePosition, OfflineDataset, TypeLabel};
use shared::{
    DescriptionOptions, FieldKind, FieldValue, GenerationMethod, HomebrewField, HomebrewOptions, NamesOptions,
};

pub struct TestFixtures;

impl TestFixtures {
    pub const AUTH_TOKEN: &'static str = "test-token";

    pub const ELF_FIRST_NAMES: [&'static str; 8] =
        ["Aelar", "Arannis", "Erevan", "Thamior", "Adrie", "Enna", "Keyleth", "Sariel"];

    pub fn dataset() -> OfflineDataset {
        let mut names: Vec<NameEntry> = Self::ELF_FIRST_NAMES
            .iter()
            .enumerate()
            .map(|(i, text)| NameEntry {
                category: "elf".to_string(),
                text: text.to_string(),
                gender: if i < 4 { "male" } else { "female" }.to_string(),
                weight: 1.0,
                position: NamePosition::First,
            })
            .collect();
        names.push(NameEntry {
            category: "elf".to_string(),
            text: "Galanodel".to_string(),
            gender: String::new(),
            weight: 1.0,
            position: NamePosition::Last,
        });
        names.push(NameEntry {
            category: "dwarf".to_string(),
            text: "Bruenor".to_string(),
            gender: "male".to_string(),
            weight: 1.0,
            position: NamePosition::First,
        });

        OfflineDataset {
            names,
            types: vec![TypeLabel {
                id: "elf".to_string(),
                text: "Elf".to_string(),
            }],
        }
    }

    pub fn names(quantity: u32, method: GenerationMethod) -> NamesOptions {
        NamesOptions {
            quantity,
            method,
            category: "elf".to_string(),
            genre: "fantasy".to_string(),
            gender: "any".to_string(),
            language: None,
        }
    }

    pub fn description() -> DescriptionOptions {
        DescriptionOptions {
            name: "The Gilded Goose".to_string(),
            category: "Tavern".to_string(),
            genre: "fantasy".to_string(),
            style: "whimsical".to_string(),
            length: "Short".to_string(),
            language: None,
            system: Some("Pathfinder".to_string()),
            notes: "  Run by a retired adventurer  ".to_string(),
        }
    }

    pub fn homebrew() -> HomebrewOptions {
        HomebrewOptions {
            name: "Monster".to_string(),
            custom_name: String::new(),
            description: "A creature for the players to fight".to_string(),
            fields: vec![
                HomebrewField::new("Hit Points", FieldKind::Number, "Maximum HP"),
                HomebrewField::new("Alignment", FieldKind::Short, "")
                    .with_value(FieldValue::Text("Chaotic Evil".to_string())),
                HomebrewField::new("Lore", FieldKind::Long, "Where it comes from"),
                HomebrewField::new("Flying", FieldKind::Boolean, ""),
            ],
            genre: "fantasy".to_string(),
            style: String::new(),
            length: "medium".to_string(),
            language: None,
            system: None,
            notes: String::new(),
        }
    }

    pub fn success(output: Value) -> Value {
        json!({ "success": true, "output": output })
    }

    pub fn failure(error: &str) -> Value {
        json!({ "success": false, "error": error })
    }
}
