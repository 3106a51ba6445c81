// File: src/validation/rules.rs
// Purpose: Per-field rules of the food form

use crate::field::Field;
use crate::record::{FormRecord, RestaurantStatus};
use crate::validation::{ErrorSet, Validate};
use foodform_validation as core;

/// Validate a single field value
///
/// Returns the message to show under the field, or `None` if it passes.
/// Presence is checked first; format checks only run on non-empty values.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    let label = field.label();

    let result = core::validate_required(value, label).and_then(|()| match field {
        Field::FoodRating => core::validate_number(value, label),
        Field::RestaurantStatus => core::validate_one_of(value, &RestaurantStatus::VALUES, label),
        Field::FoodName | Field::FoodImage | Field::RestaurantName | Field::RestaurantLogo => Ok(()),
    });

    result.err()
}

impl Validate for FormRecord {
    fn validate(&self) -> Result<(), ErrorSet> {
        let errors: ErrorSet = self
            .iter()
            .filter_map(|(field, value)| validate_field(field, value).map(|msg| (field, msg)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
