//! Store error types.

use thiserror::Error;

use crate::store::RecordKey;

/// Store operation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No record with the given key exists in the store
    #[error("{kind} with id {key} not found")]
    NotFound { kind: &'static str, key: RecordKey },

    /// No checklist with the given name exists
    #[error("Checklist '{name}' not found")]
    ChecklistNotFound { name: String },

    /// A checklist with the given name already exists
    #[error("Checklist '{name}' already exists")]
    ChecklistExists { name: String },

    /// Caller supplied an out-of-domain value
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Returns true if the error refers to a missing record or checklist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::ChecklistNotFound { .. }
        )
    }
}

/// Input validation errors raised at the input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field was empty or whitespace
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Numeric field was negative
    #[error("Field '{field}' must not be negative (got {value})")]
    Negative { field: &'static str, value: String },

    /// Numeric field could not be parsed
    #[error("Field '{field}' is not a valid number: '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// Enumerated field outside its declared domain
    #[error("Field '{field}' has unknown value '{value}' (expected one of: {allowed})")]
    UnknownVariant {
        field: &'static str,
        value: String,
        allowed: String,
    },

    /// Date field could not be parsed
    #[error("Field '{field}' is not a valid date: '{value}'")]
    MalformedDate { field: &'static str, value: String },

    /// Numeric result would exceed the field's range
    #[error("Field '{field}' would overflow")]
    Overflow { field: &'static str },

    /// Field name not part of the record schema, or not updatable
    #[error("{kind} has no updatable field '{field}'")]
    UnknownField { kind: &'static str, field: String },

    /// Input was not of the form `field=value`
    #[error("Expected field=value, got '{value}'")]
    MalformedPair { value: String },
}

/// Convenience alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;
