// foodform - food and restaurant submission form
// Typed form record, field-level validation and Maud rendering of the page

pub mod field;
pub mod record;
pub mod validation;
pub mod form;
pub mod form_field;
pub mod renderer;
pub mod config;

// Re-export the form model
pub use field::{Field, InputKind, UnknownField};
pub use record::{FormRecord, InvalidStatus, RestaurantStatus};
pub use validation::{validate_field, ErrorSet, Validate, ValidationResult};
pub use form::{FoodForm, SubmitOutcome};
pub use form_field::{FieldAttrs, FormField, SelectOption};
pub use config::Config;

// Re-export Maud for callers composing pages
pub use maud::{html as maud, Markup, PreEscaped, DOCTYPE};
