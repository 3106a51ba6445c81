// File: src/form.rs
// Purpose: Form state and the submit transition

use crate::field::Field;
use crate::record::FormRecord;
use crate::validation::{ErrorSet, Validate};
use tracing::{debug, info};

/// What a submit did with the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record passed validation; the form has been reset
    Accepted(FormRecord),
    /// Record failed validation; the form kept its values
    Rejected,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// The food form while it is being edited
///
/// Every event consumes the form and returns the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodForm {
    record: FormRecord,
    errors: ErrorSet,
}

impl FoodForm {
    /// Empty form with no errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Form holding previously entered values and no errors yet
    pub fn from_record(record: FormRecord) -> Self {
        Self {
            record,
            errors: ErrorSet::new(),
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Message currently shown under a field
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Apply one input change
    ///
    /// Errors from the last submit are left in place until the next submit.
    pub fn update(self, field: Field, value: impl Into<String>) -> Self {
        Self {
            record: self.record.with(field, value),
            errors: self.errors,
        }
    }

    /// Validate and either accept the record (resetting the form) or keep
    /// it with a freshly computed error set.
    pub fn submit(self) -> (Self, SubmitOutcome) {
        match self.record.validate() {
            Ok(()) => {
                info!(record = ?self.record, "Form submitted");
                (Self::new(), SubmitOutcome::Accepted(self.record))
            }
            Err(errors) => {
                debug!(error_count = errors.len(), fields = ?errors.fields(), "Form rejected");
                let form = Self {
                    record: self.record,
                    errors,
                };
                (form, SubmitOutcome::Rejected)
            }
        }
    }
}
