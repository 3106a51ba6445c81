// File: src/form_field.rs
// Purpose: Control metadata for each form field, including client-side validation rules

use crate::field::{Field, InputKind};
use crate::record::{FormRecord, RestaurantStatus};
use serde_json::json;

/// One `<option>` of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Metadata for a form field including HTML5 and client-side validation attributes
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAttrs {
    /// Used for both `id` and `name`
    pub name: &'static str,
    /// Field label for display
    pub label: &'static str,
    /// `type` attribute of the input; `None` for a select
    pub input_type: Option<&'static str>,
    /// HTML5 `required` flag
    pub required: bool,
    /// Options of a select control, placeholder first
    pub options: Vec<SelectOption>,
    /// JSON string for the data-validate attribute (WASM validation)
    pub data_validate: String,
}

impl FieldAttrs {
    /// Build the attributes for a field
    pub fn for_field(field: Field) -> Self {
        let kind = field.input_kind();

        let input_type = match kind {
            InputKind::Text => Some("text"),
            InputKind::Number => Some("number"),
            InputKind::Select => None,
        };

        let options = match kind {
            InputKind::Select => std::iter::once(SelectOption {
                value: "",
                label: "Select Status",
            })
            .chain(RestaurantStatus::ALL.into_iter().map(|status| SelectOption {
                value: status.as_str(),
                label: status.as_str(),
            }))
            .collect(),
            _ => Vec::new(),
        };

        let mut rules = json!({ "field": field.name(), "required": true });
        match kind {
            InputKind::Number => rules["number"] = json!(true),
            InputKind::Select => rules["oneOf"] = json!(RestaurantStatus::VALUES),
            InputKind::Text => {}
        }

        Self {
            name: field.name(),
            label: field.label(),
            input_type,
            required: true,
            options,
            data_validate: rules.to_string(),
        }
    }

    pub fn is_select(&self) -> bool {
        self.input_type.is_none()
    }
}

/// Trait for forms that can describe their fields for rendering
pub trait FormField {
    /// Get field attributes for the specified field
    fn field_attrs(&self, field: Field) -> FieldAttrs;

    /// Get all field names
    fn field_names(&self) -> Vec<&'static str>;
}

impl FormField for FormRecord {
    fn field_attrs(&self, field: Field) -> FieldAttrs {
        FieldAttrs::for_field(field)
    }

    fn field_names(&self) -> Vec<&'static str> {
        Field::ALL.iter().map(|field| field.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rating_is_number_input() {
        let attrs = FormRecord::new().field_attrs(Field::FoodRating);
        assert_eq!(attrs.input_type, Some("number"));
        assert!(attrs.required);
        assert!(attrs.options.is_empty());

        let rules: serde_json::Value = serde_json::from_str(&attrs.data_validate).unwrap();
        assert_eq!(
            rules,
            json!({ "field": "food_rating", "required": true, "number": true })
        );
    }

    #[test]
    fn test_status_is_select_with_placeholder() {
        let attrs = FieldAttrs::for_field(Field::RestaurantStatus);
        assert!(attrs.is_select());

        let values: Vec<&str> = attrs.options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["", "Open Now", "Closed"]);
        assert_eq!(attrs.options[0].label, "Select Status");

        let rules: serde_json::Value = serde_json::from_str(&attrs.data_validate).unwrap();
        assert_eq!(rules["oneOf"], json!(["Open Now", "Closed"]));
    }

    #[test]
    fn test_text_fields() {
        let attrs = FieldAttrs::for_field(Field::FoodImage);
        assert_eq!(attrs.input_type, Some("text"));
        assert_eq!(attrs.label, "Food Image URL");
        assert_eq!(attrs.name, "food_image");
    }

    #[test]
    fn test_field_names_in_form_order() {
        assert_eq!(
            FormRecord::new().field_names(),
            vec![
                "food_name",
                "food_rating",
                "food_image",
                "restaurant_name",
                "restaurant_logo",
                "restaurant_status",
            ]
        );
    }
}
