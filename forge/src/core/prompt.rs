//! Prompt compilation.
//!
//! Each compiler emits one instruction line per active facet in a fixed
//! order: subject, language, length, genre/style, system, name, then notes.
//! Compilation never fails; implausible facets are the validator's concern.

use shared::{DescriptionOptions, HomebrewField, HomebrewOptions, LengthTier, NamesOptions};

use crate::core::validation::Validated;

/// Canned sentence for each recognized length tier
pub fn length_directive(tier: LengthTier) -> &'static str {
    match tier {
        LengthTier::Short => "The description should be a short blurb, up to 4 sentences.",
        LengthTier::Medium => "The description should be short, up to 2 paragraphs of ~4 sentences each.",
        LengthTier::Extensive => {
            "The description should be long and detailed, up to 4 paragraphs of ~4 sentences each."
        }
    }
}

/// Facets shared by description and homebrew prompts
struct Facets<'a> {
    language: Option<&'a str>,
    length: &'a str,
    genre: &'a str,
    style: &'a str,
    system: Option<&'a str>,
}

impl Facets<'_> {
    fn push_language(&self, lines: &mut Vec<String>) {
        if let Some(language) = self.language {
            lines.push(format!("Generate everything in the {{{language}}} language."));
        }
    }

    fn push_length(&self, lines: &mut Vec<String>) {
        if let Some(tier) = LengthTier::parse(self.length) {
            lines.push(length_directive(tier).to_string());
        }
    }

    fn push_genre(&self, lines: &mut Vec<String>, subject: &str) {
        let genre = self.genre;
        if self.style.is_empty() {
            lines.push(format!("Create {subject} in the {{{genre}}} genre."));
        } else {
            let style = self.style;
            lines.push(format!("Create {subject} in the {{{genre}}} genre, with a style of {{{style}}}."));
        }
    }

    fn push_system(&self, lines: &mut Vec<String>, subject: &str) {
        match self.system {
            Some(system) => lines.push(format!(
                "Make sure {subject} is compatible with {{{system}}} (a TTRPG system)."
            )),
            None => lines.push(format!(
                "Make sure {subject} isn't tied to a specific system (e.g. Dungeons & Dragons or Pathfinder)."
            )),
        }
    }
}

fn push_notes(lines: &mut Vec<String>, notes: &str) {
    if !notes.is_empty() {
        lines.push(format!("Here are some additional notes:\n{{{notes}}}"));
    }
}

/// Prompt for the names endpoint
pub fn compile_names_prompt(options: &Validated<NamesOptions>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Generate {} name(s) for a(n) {{{}}}.",
        options.quantity, options.category
    ));
    if let Some(language) = &options.language {
        lines.push(format!("Generate everything in the {{{language}}} language."));
    }
    lines.push(format!("The names should fit the {{{}}} genre.", options.genre));
    if !options.gender.is_empty() && options.gender != "any" {
        lines.push(format!("The names should be {{{}}}.", options.gender));
    }

    lines.join("\n")
}

/// Prompt for the description endpoint
pub fn compile_description_prompt(options: &Validated<DescriptionOptions>) -> String {
    let facets = Facets {
        language: options.language.as_deref(),
        length: &options.length,
        genre: &options.genre,
        style: &options.style,
        system: options.system.as_deref(),
    };
    let mut lines = Vec::new();

    lines.push(format!(
        "I would like a description for a(n) {{{}}}.",
        options.category.to_lowercase()
    ));
    facets.push_language(&mut lines);
    facets.push_length(&mut lines);
    facets.push_genre(&mut lines, "the description");
    facets.push_system(&mut lines, "your description");
    if options.name.is_empty() {
        lines.push("Come up with your own name for it!".to_string());
    } else {
        lines.push(format!("The name of it is {{{}}}", options.name));
    }
    push_notes(&mut lines, &options.notes);

    lines.join("\n")
}

fn field_line(field: &HomebrewField) -> String {
    let value = match &field.value {
        Some(value) => format!("\"{value}\""),
        None => "{generate}".to_string(),
    };
    format!("\"{}\": ({}) = {}", field.name, field.kind.prompt_hint(), value)
}

/// Prompt for the homebrew endpoint; pair it with
/// [`compile_schema`](crate::core::schema::compile_schema)
pub fn compile_homebrew_prompt(options: &Validated<HomebrewOptions>) -> String {
    let facets = Facets {
        language: options.language.as_deref(),
        length: &options.length,
        genre: &options.genre,
        style: &options.style,
        system: options.system.as_deref(),
    };
    let subject = format!("the {}", options.name);
    let mut lines = Vec::new();

    if options.description.is_empty() {
        lines.push(format!("Generate a(n) {{{}}}.", options.name));
    } else {
        lines.push(format!("Generate a(n) {{{}}}: {}", options.name, options.description));
    }
    facets.push_language(&mut lines);
    facets.push_length(&mut lines);
    facets.push_genre(&mut lines, &subject);
    facets.push_system(&mut lines, &subject);
    if options.custom_name.is_empty() {
        lines.push(format!("Generate the name for the {}", options.name));
    } else {
        lines.push(format!(
            "The name of the thing being generated is {{{}}}",
            options.custom_name
        ));
    }
    lines.push("Fields:".to_string());
    lines.extend(options.fields.iter().map(field_line));
    push_notes(&mut lines, &options.notes);

    lines.join("\n")
}
