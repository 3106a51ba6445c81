//! foodform validation WASM
//!
//! WebAssembly bindings for the food form validator.
//! Runs the same rules in the browser that the server applies on submit.

use foodform::{validate_field, ErrorSet, Field, FormRecord, RestaurantStatus, UnknownField, Validate};
use foodform_validation as core;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Serialize with maps as plain JS objects
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

/// Errors for a whole record, keyed by field name
pub fn form_errors(record: &FormRecord) -> ErrorSet {
    record.validate().err().unwrap_or_default()
}

/// Error for one field looked up by name
pub fn field_error(field_name: &str, value: &str) -> Result<Option<String>, UnknownField> {
    let field: Field = field_name.parse()?;
    Ok(validate_field(field, value))
}

/// Validate a whole form
///
/// # Returns
/// Object mapping failing field names to messages (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm({
///     food_name: 'Pizza',
///     food_rating: 'abc',
/// });
/// // { food_rating: 'Food Rating must be a number.', food_image: ..., ... }
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(record: JsValue) -> Result<JsValue, JsValue> {
    let record: FormRecord = serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form: {}", e)))?;

    to_js(&form_errors(&record))
}

/// Validate a single field value
///
/// Returns the message to show, `undefined` if the value passes, and throws
/// for an unknown field name.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(field_name: &str, value: &str) -> Result<Option<String>, JsValue> {
    field_error(field_name, value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Quick rating check
#[wasm_bindgen(js_name = isNumber)]
pub fn is_number_js(value: &str) -> bool {
    core::is_number(value)
}

/// Quick status check
#[wasm_bindgen(js_name = isValidStatus)]
pub fn is_valid_status_js(value: &str) -> bool {
    value.parse::<RestaurantStatus>().is_ok()
}
