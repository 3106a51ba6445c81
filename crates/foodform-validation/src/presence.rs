//! Presence validation functions

/// A value is present when it is not the empty string.
///
/// Whitespace counts as content; nothing is trimmed.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Validates that a value is present, reporting it under `label`
pub fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if is_present(value) {
        Ok(())
    } else {
        Err(format!("{} is required.", label))
    }
}
