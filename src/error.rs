//! Error types shared by every record operation.

use crate::framework::FrameworkError;
use crate::model::EntityKind;
use thiserror::Error;

/// A field-level rule was violated by a create or update payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending field (e.g. `rut`).
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors surfaced by list/get/create/update/delete operations.
///
/// Every failure leaves the store unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    /// Uniqueness, required-field, format, enum, range or reference violation.
    #[error("Validation error on {0}")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// A mutating operation was attempted without authentication.
    #[error("Authentication required")]
    Unauthorized,

    /// The operation would break a relationship invariant of the store.
    #[error("Integrity conflict: {0}")]
    IntegrityConflict(String),

    /// The store could not be reached.
    #[error("Store error: {0}")]
    Store(#[from] FrameworkError),
}

impl RecordError {
    pub fn not_found(entity: EntityKind, id: impl ToString) -> Self {
        RecordError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// The offending field, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RecordError::Validation(e) => Some(e.field),
            _ => None,
        }
    }
}
