//! Attendance-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AttendanceId, DomainError, ErrorCode, ValidationError};

/// Attendance errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("Attendance record not found: {0}")]
    NotFound(AttendanceId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("{0}")]
    Infrastructure(String),
}

impl AttendanceError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AttendanceError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AttendanceError::NotFound(_) => ErrorCode::AttendanceNotFound,
            AttendanceError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AttendanceError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for AttendanceError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        let message = match err {
            ValidationError::EmptyField { .. } => "is required".to_string(),
            ValidationError::InvalidFormat { reason, .. } => reason,
        };
        AttendanceError::ValidationFailed { field, message }
    }
}

impl From<DomainError> for AttendanceError {
    fn from(err: DomainError) -> Self {
        AttendanceError::Infrastructure(err.message)
    }
}
