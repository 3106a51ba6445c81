// File: src/record.rs
// Purpose: The form's field values and the restaurant status options

use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Values of the six form fields, exactly as entered
///
/// Missing fields deserialize as empty strings, so a partial form body is
/// still a complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRecord {
    pub food_name: String,
    pub food_rating: String,
    pub food_image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: String,
}

impl FormRecord {
    /// All-empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FoodName => &self.food_name,
            Field::FoodRating => &self.food_rating,
            Field::FoodImage => &self.food_image,
            Field::RestaurantName => &self.restaurant_name,
            Field::RestaurantLogo => &self.restaurant_logo,
            Field::RestaurantStatus => &self.restaurant_status,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FoodName => &mut self.food_name,
            Field::FoodRating => &mut self.food_rating,
            Field::FoodImage => &mut self.food_image,
            Field::RestaurantName => &mut self.restaurant_name,
            Field::RestaurantLogo => &mut self.restaurant_logo,
            Field::RestaurantStatus => &mut self.restaurant_status,
        }
    }

    /// Returns the record with one field replaced
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.slot(field) = value.into();
        self
    }

    /// Iterate over `(field, value)` pairs in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// True if every field is the empty string
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}

/// Whether a restaurant is currently serving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestaurantStatus {
    #[serde(rename = "Open Now")]
    OpenNow,
    #[serde(rename = "Closed")]
    Closed,
}

impl RestaurantStatus {
    pub const ALL: [RestaurantStatus; 2] = [RestaurantStatus::OpenNow, RestaurantStatus::Closed];

    /// Option values accepted by the status field
    pub const VALUES: [&'static str; 2] = ["Open Now", "Closed"];

    pub fn as_str(self) -> &'static str {
        match self {
            RestaurantStatus::OpenNow => "Open Now",
            RestaurantStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not exactly one of the status options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatus(pub String);

impl fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid restaurant status '{}'", self.0)
    }
}

impl std::error::Error for InvalidStatus {}

impl FromStr for RestaurantStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RestaurantStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}
