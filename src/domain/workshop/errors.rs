//! Workshop-specific error types.

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, ParticipantId, ValidationError, WorkshopId,
};

/// Workshop and enrollment errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkshopError {
    #[error("Workshop not found: {0}")]
    NotFound(WorkshopId),

    #[error("Student not found or not active: {0}")]
    StudentUnavailable(ParticipantId),

    #[error("Instructor not found or not an active instructor: {0}")]
    InstructorUnavailable(ParticipantId),

    #[error("Student {participant_id} is already enrolled in workshop {workshop_id}")]
    AlreadyEnrolled {
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    },

    #[error("Participant {participant_id} is not enrolled in workshop {workshop_id}")]
    EnrollmentNotFound {
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("{0}")]
    Infrastructure(String),
}

impl WorkshopError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WorkshopError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkshopError::NotFound(_) => ErrorCode::WorkshopNotFound,
            WorkshopError::StudentUnavailable(_) => ErrorCode::ParticipantNotFound,
            WorkshopError::InstructorUnavailable(_) => ErrorCode::ValidationFailed,
            WorkshopError::AlreadyEnrolled { .. } => ErrorCode::AlreadyEnrolled,
            WorkshopError::EnrollmentNotFound { .. } => ErrorCode::EnrollmentNotFound,
            WorkshopError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WorkshopError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for WorkshopError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        let message = match err {
            ValidationError::EmptyField { .. } => "is required".to_string(),
            ValidationError::InvalidFormat { reason, .. } => reason,
        };
        WorkshopError::ValidationFailed { field, message }
    }
}

impl From<DomainError> for WorkshopError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                WorkshopError::ValidationFailed {
                    field: err.details.get("field").cloned().unwrap_or_default(),
                    message: err.message,
                }
            }
            _ => WorkshopError::Infrastructure(err.message),
        }
    }
}
