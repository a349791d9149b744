//! Field validation for candidate cash flow records.
//!
//! The validator accumulates every violation before failing so the caller
//! can report all invalid fields at once. Rule evaluation order never
//! changes the resulting violation set.
use std::collections::HashMap;

use super::{ResultEngine, error::EngineError};

/// A candidate value under validation.
#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
}

/// Collects rule violations keyed by field name.
#[derive(Debug, Default)]
pub struct Validator {
    errors: HashMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be present. A blank or whitespace-only string counts
    /// as absent.
    pub fn required(&mut self, field: &str, value: FieldValue<'_>, message: &str) {
        let missing = match value {
            FieldValue::Text(None) | FieldValue::Number(None) => true,
            FieldValue::Text(Some(text)) => text.trim().is_empty(),
            FieldValue::Number(Some(_)) => false,
        };

        if missing {
            self.errors.insert(field.to_string(), message.to_string());
        }
    }

    /// The field, when numeric, must be strictly greater than `min_value`.
    /// Absent values are left to the `required` rule.
    pub fn min(&mut self, field: &str, value: FieldValue<'_>, min_value: f64, message: &str) {
        if let FieldValue::Number(Some(number)) = value
            && number <= min_value
        {
            self.errors.insert(field.to_string(), message.to_string());
        }
    }

    /// Fails with the accumulated violations when any rule failed.
    pub fn finish(self) -> ResultEngine<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(EngineError::Validation(self.errors))
        }
    }
}
