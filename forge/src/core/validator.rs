//! Chainable sanitizers for string and number inputs.
//!
//! Start with [`validate_string`] or [`validate_number`], chain rules, then
//! call `finish` to get either the sanitized value or the first rule that
//! failed. Failing rules still normalize the value (clipping, clamping,
//! falling back to a default), so [`StringValidator::value`] is usable by
//! callers that prefer leniency.

use std::fmt::Display;

use crate::error::{ValidationError, Violation};

#[derive(Debug, Clone)]
pub struct StringValidator {
    value: String,
    violation: Option<Violation>,
}

pub fn validate_string(value: impl Into<String>) -> StringValidator {
    StringValidator {
        value: value.into(),
        violation: None,
    }
}

impl StringValidator {
    fn fail(&mut self, violation: Violation) {
        if self.violation.is_none() {
            self.violation = Some(violation);
        }
    }

    /// Replace an empty string with `default`
    pub fn default(mut self, default: &str) -> Self {
        if self.value.is_empty() {
            self.value = default.to_string();
        }
        self
    }

    pub fn trim(mut self) -> Self {
        let trimmed = self.value.trim();
        if trimmed.len() != self.value.len() {
            self.value = trimmed.to_string();
        }
        self
    }

    /// Reject an empty string
    pub fn required(mut self) -> Self {
        if self.value.is_empty() {
            self.fail(Violation::Empty);
        }
        self
    }

    /// Clip to `max_length` characters
    pub fn clip(mut self, max_length: usize) -> Self {
        if self.value.chars().count() > max_length {
            self.fail(Violation::TooLong { max: max_length });
            self.value = self.value.chars().take(max_length).collect();
        }
        self
    }

    pub fn to_lower(mut self) -> Self {
        self.value = self.value.to_lowercase();
        self
    }

    pub fn to_upper(mut self) -> Self {
        self.value = self.value.to_uppercase();
        self
    }

    /// Require one of `choices`, falling back to `default` otherwise
    pub fn choices(mut self, choices: &[&str], default: &str) -> Self {
        if !choices.contains(&self.value.as_str()) {
            self.fail(Violation::NotInChoices);
            self.value = default.to_string();
        }
        self
    }

    /// Sanitized value regardless of violations
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }

    pub fn finish(self, field: &'static str) -> Result<String, ValidationError> {
        match self.violation {
            Some(violation) => Err(ValidationError::Invalid { field, violation }),
            None => Ok(self.value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NumberValidator<T> {
    value: T,
    violation: Option<Violation>,
}

pub fn validate_number<T: PartialOrd + Copy + Display>(value: T) -> NumberValidator<T> {
    NumberValidator { value, violation: None }
}

impl<T: PartialOrd + Copy + Display> NumberValidator<T> {
    fn fail(&mut self, violation: Violation) {
        if self.violation.is_none() {
            self.violation = Some(violation);
        }
    }

    /// Raise to at least `min`
    pub fn min(mut self, min: T) -> Self {
        if self.value < min {
            self.fail(Violation::TooSmall { min: min.to_string() });
            self.value = min;
        }
        self
    }

    /// Lower to at most `max`
    pub fn max(mut self, max: T) -> Self {
        if self.value > max {
            self.fail(Violation::TooLarge { max: max.to_string() });
            self.value = max;
        }
        self
    }

    /// Clamp between `min` and `max`
    pub fn min_max(self, min: T, max: T) -> Self {
        self.min(min).max(max)
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn violation(&self) -> Option<&Violation> {
        self.violation.as_ref()
    }

    pub fn finish(self, field: &'static str) -> Result<T, ValidationError> {
        match self.violation {
            Some(violation) => Err(ValidationError::Invalid { field, violation }),
            None => Ok(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_default_and_lower() {
        let value = validate_string("").default("Fantasy").to_lower().finish("genre").unwrap();
        assert_eq!(value, "fantasy");
    }

    #[test]
    fn test_clip_records_violation_but_keeps_prefix() {
        let validator = validate_string("abcdef").clip(3);
        assert_eq!(validator.value(), "abc");
        assert_eq!(validator.violation(), Some(&Violation::TooLong { max: 3 }));
        assert!(validator.finish("notes").is_err());
    }

    #[test]
    fn test_choices_falls_back() {
        let validator = validate_string("huge").choices(&["short", "medium", "extensive"], "medium");
        assert_eq!(validator.value(), "medium");
        assert_eq!(validator.violation(), Some(&Violation::NotInChoices));
    }

    #[test]
    fn test_first_violation_wins() {
        let err = validate_string("").required().clip(0).finish("type").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Invalid {
                field: "type",
                violation: Violation::Empty
            }
        );
    }

    #[test]
    fn test_number_min_max_clamps() {
        let low = validate_number(0u32).min_max(1, 50);
        assert_eq!(low.value(), 1);
        assert!(matches!(low.violation(), Some(Violation::TooSmall { .. })));

        let high = validate_number(99u32).min_max(1, 50);
        assert_eq!(high.value(), 50);
        assert!(matches!(high.violation(), Some(Violation::TooLarge { .. })));

        assert_eq!(validate_number(7u32).min_max(1, 50).finish("quantity").unwrap(), 7);
    }
}
