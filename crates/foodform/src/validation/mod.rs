// File: src/validation/mod.rs
// Purpose: Validation runtime, error set and validator trait

use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod rules;

pub use rules::validate_field;

/// Trait for types that can be validated
pub trait Validate {
    /// Validates every field and returns all failures at once
    ///
    /// Returns Ok(()) if valid, or Err with one message per failing field
    fn validate(&self) -> Result<(), ErrorSet>;
}

/// Field names mapped to the message shown under each failing field
///
/// Always rebuilt from scratch by a validation pass. Iterates in form order
/// and serializes as an object keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<Field, String>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Get the error message for a field
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Field names of all failing fields, in form order
    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }
}

impl FromIterator<(Field, String)> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of validation with errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "valid")]
    pub is_valid: bool,
    pub errors: ErrorSet,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: ErrorSet::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(errors: ErrorSet) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert from Result
    pub fn from_result(result: Result<(), ErrorSet>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(errors) => Self::failure(errors),
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }
}
