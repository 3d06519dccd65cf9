//! Typed error handling for the catalog core
//!
//! The engine itself never fails: contradictory or empty criteria resolve
//! to empty results. Errors exist only at the store boundary (malformed
//! patches, failed loads, poisoned locks) and in form validation, and all
//! of them are local and recoverable.

use serde::Serialize;
use thiserror::Error;

/// Errors raised by the catalog and profile stores.
///
/// A rejected operation never leaves the store in a partially-updated
/// state: a bad patch leaves criteria unchanged, a failed load leaves the
/// store with an empty catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A JSON patch named a filter dimension the store does not know
    #[error("unknown filter dimension '{dimension}'")]
    UnknownDimension { dimension: String },

    /// A patch value had the wrong shape for its dimension
    #[error("invalid patch for dimension '{dimension}': {reason}")]
    InvalidPatch { dimension: String, reason: String },

    /// The item source failed; the store holds an empty catalog until retried
    #[error("catalog load failed: {message}")]
    Load { message: String },

    /// An update was requested while no user is loaded
    #[error("no user loaded")]
    NoUser,

    /// Internal lock poisoning; should not happen in normal operation
    #[error("failed to acquire store lock: {message}")]
    Lock { message: String },
}

impl StoreError {
    /// Stable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::UnknownDimension { .. } => "UNKNOWN_DIMENSION",
            StoreError::InvalidPatch { .. } => "INVALID_PATCH",
            StoreError::Load { .. } => "LOAD_FAILED",
            StoreError::NoUser => "NO_USER",
            StoreError::Lock { .. } => "LOCK_FAILED",
        }
    }
}

/// A single failed field in a validated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name in the flat field-value mapping
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

/// Errors raised by the declarative validation rule list.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed their rules; all failures are collected
    #[error("validation failed for {} field(s)", .0.len())]
    FieldErrors(Vec<FieldError>),
}

impl ValidationError {
    /// The collected field errors.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = StoreError::UnknownDimension {
            dimension: "color".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_DIMENSION");
        assert_eq!(StoreError::NoUser.error_code(), "NO_USER");
    }

    #[test]
    fn test_display_names_the_dimension() {
        let err = StoreError::InvalidPatch {
            dimension: "minRating".to_string(),
            reason: "expected a number".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("minRating"));
        assert!(message.contains("expected a number"));
    }

    #[test]
    fn test_validation_error_collects_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldError {
                field: "firstName".to_string(),
                message: "required".to_string(),
            },
            FieldError {
                field: "bio".to_string(),
                message: "too long".to_string(),
            },
        ]);
        assert_eq!(err.field_errors().len(), 2);
        assert!(err.to_string().contains("2 field(s)"));
    }
}
