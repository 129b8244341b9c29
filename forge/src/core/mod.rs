//! Forge core business logic

pub mod prompt;
pub mod reconcile;
pub mod schema;
pub mod validation;
pub mod validator;

pub use prompt::{compile_description_prompt, compile_homebrew_prompt, compile_names_prompt};
pub use reconcile::{reconcile, reconcile_homebrew};
pub use schema::{compile_schema, SchemaDescriptor};
pub use validation::{Validate, Validated};
pub use validator::{validate_number, validate_string, NumberValidator, StringValidator};
