//! Declarative form validation
//!
//! Form validation is modeled as a flat rule list evaluated against a flat
//! field-value mapping, independent of the filtering engine. Each
//! [`FieldRule`] names one field, an ordered list of normalizing filters,
//! and an ordered list of validators. [`validate`] applies the filters in
//! place, runs every validator, and collects all failures rather than
//! stopping at the first.

pub mod filters;
pub mod validators;

use crate::core::error::{FieldError, ValidationError};
use anyhow::Result;
use serde_json::{Map, Value};

/// A normalizing filter applied to a field value before validation.
pub type FieldFilter = Box<dyn Fn(&str, Value) -> Result<Value> + Send + Sync>;

/// A single-field validator; returns a message on failure.
pub type FieldValidator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Validation rules for one named field.
pub struct FieldRule {
    /// Field name in the flat mapping
    pub field: String,
    filters: Vec<FieldFilter>,
    validators: Vec<FieldValidator>,
}

impl FieldRule {
    /// Start a rule for the given field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            filters: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Append a normalizing filter.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Append a validator.
    pub fn validator<V>(mut self, validator: V) -> Self
    where
        V: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }
}

/// Evaluate a rule list against a flat field-value mapping.
///
/// Filters mutate the mapping in place (trim, lowercase); validators then
/// run against the normalized values. Fields absent from the mapping are
/// validated as `Value::Null`, so `required` fires for them while format
/// validators pass through. All field errors are collected into a single
/// [`ValidationError::FieldErrors`].
pub fn validate(rules: &[FieldRule], fields: &mut Map<String, Value>) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    for rule in rules {
        let mut value = fields.get(&rule.field).cloned().unwrap_or(Value::Null);

        for filter in &rule.filters {
            match filter(&rule.field, value) {
                Ok(filtered) => value = filtered,
                Err(e) => {
                    errors.push(FieldError {
                        field: rule.field.clone(),
                        message: e.to_string(),
                    });
                    value = Value::Null;
                    break;
                }
            }
        }

        if !value.is_null() {
            fields.insert(rule.field.clone(), value.clone());
        }

        for validator in &rule.validators {
            if let Err(message) = validator(&rule.field, &value) {
                errors.push(FieldError {
                    field: rule.field.clone(),
                    message,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}
