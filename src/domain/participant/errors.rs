//! Participant-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, ValidationError};
use crate::domain::workshop::WorkshopRef;

/// Participant errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantError {
    #[error("Participant not found: {0}")]
    NotFound(ParticipantId),

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("CPF already registered")]
    DuplicateCpf,

    #[error("Email already registered")]
    DuplicateEmail,

    /// Deactivation blocked because workshops still reference the participant.
    #[error("Participant cannot be removed because they instruct one or more workshops")]
    InstructorOfWorkshops(Vec<WorkshopRef>),

    #[error("{0}")]
    Infrastructure(String),
}

impl ParticipantError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ParticipantError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParticipantError::NotFound(_) => ErrorCode::ParticipantNotFound,
            ParticipantError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ParticipantError::DuplicateCpf => ErrorCode::DuplicateCpf,
            ParticipantError::DuplicateEmail => ErrorCode::DuplicateEmail,
            ParticipantError::InstructorOfWorkshops(_) => ErrorCode::InstructorInUse,
            ParticipantError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for ParticipantError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        let message = match err {
            ValidationError::EmptyField { .. } => "is required".to_string(),
            ValidationError::InvalidFormat { reason, .. } => reason,
        };
        ParticipantError::ValidationFailed { field, message }
    }
}

impl From<DomainError> for ParticipantError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateCpf => ParticipantError::DuplicateCpf,
            ErrorCode::DuplicateEmail => ParticipantError::DuplicateEmail,
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                ParticipantError::ValidationFailed {
                    field: err.details.get("field").cloned().unwrap_or_default(),
                    message: err.message,
                }
            }
            _ => ParticipantError::Infrastructure(err.message),
        }
    }
}
