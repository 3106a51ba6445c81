// File: src/field.rs
// Purpose: The six form fields and their display metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the food form, in the order it is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FoodName,
    FoodRating,
    FoodImage,
    RestaurantName,
    RestaurantLogo,
    RestaurantStatus,
}

/// Kind of control a field is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Select,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 6] = [
        Field::FoodName,
        Field::FoodRating,
        Field::FoodImage,
        Field::RestaurantName,
        Field::RestaurantLogo,
        Field::RestaurantStatus,
    ];

    /// Name used for the `name`/`id` attributes and in JSON
    pub fn name(self) -> &'static str {
        match self {
            Field::FoodName => "food_name",
            Field::FoodRating => "food_rating",
            Field::FoodImage => "food_image",
            Field::RestaurantName => "restaurant_name",
            Field::RestaurantLogo => "restaurant_logo",
            Field::RestaurantStatus => "restaurant_status",
        }
    }

    /// Human-readable label, also used as the subject of error messages
    pub fn label(self) -> &'static str {
        match self {
            Field::FoodName => "Food Name",
            Field::FoodRating => "Food Rating",
            Field::FoodImage => "Food Image URL",
            Field::RestaurantName => "Restaurant Name",
            Field::RestaurantLogo => "Restaurant Logo URL",
            Field::RestaurantStatus => "Restaurant Status",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::FoodRating => InputKind::Number,
            Field::RestaurantStatus => InputKind::Select,
            _ => InputKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name one of the form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = "food".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "unknown form field 'food'");
        assert!("Food_Name".parse::<Field>().is_err());
    }

    #[test]
    fn test_serde_uses_field_names() {
        let json = serde_json::to_string(&Field::RestaurantLogo).unwrap();
        assert_eq!(json, r#""restaurant_logo""#);
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(Field::FoodRating.input_kind(), InputKind::Number);
        assert_eq!(Field::RestaurantStatus.input_kind(), InputKind::Select);
        assert_eq!(Field::FoodImage.input_kind(), InputKind::Text);
    }
}
