use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use gearbook_db::db::query::reservation::conflicts::EquipmentConflict;

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The occurrence a batch stopped on, with the reservations that block it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictError {
    /// Zero-based position of the occurrence in emission order.
    pub occurrence_index: usize,
    pub occurrence_begin: NaiveDateTime,
    pub conflicts: Vec<EquipmentConflict>,
}

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Malformed or missing request fields. Raised before any expansion or
    /// commit runs, so the request has no side effects.
    #[error("Validation failed on {} field(s)", .0.len())]
    InputValidation(Vec<FieldError>),

    /// Inconsistent recurrence parameters. Also side-effect free.
    #[error("Recurrence configuration error: {0}")]
    RecurrenceConfig(String),

    /// Equipment double-booking discovered mid-batch. Occurrences committed
    /// earlier in the same batch remain persisted.
    #[error("Equipment conflict on occurrence {} beginning {}", .0.occurrence_index, .0.occurrence_begin)]
    Conflict(ConflictError),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    #[error(transparent)]
    DatabaseError(#[from] gearbook_db::error::DbError),

    #[error("Diesel error: {0}")]
    DieselError(#[from] diesel::result::Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
