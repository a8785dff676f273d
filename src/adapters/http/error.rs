//! Error mapping from application errors to HTTP responses.
//!
//! Every failure leaves the API as `{"error": message, "code": CODE}`;
//! blocked participant deactivation also lists the dependent workshops.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::attendance::AttendanceError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::participant::ParticipantError;
use crate::domain::workshop::{WorkshopError, WorkshopRef};

/// Standard error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable message.
    pub error: String,
    /// Machine readable error code.
    pub code: String,
    /// Workshops blocking a participant deactivation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workshops: Option<Vec<WorkshopRef>>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            workshops: None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// API Error
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Participant(ParticipantError),
    Workshop(WorkshopError),
    Attendance(AttendanceError),
    /// Malformed path, query or body.
    BadRequest(String),
}

impl From<ParticipantError> for ApiError {
    fn from(err: ParticipantError) -> Self {
        ApiError::Participant(err)
    }
}

impl From<WorkshopError> for ApiError {
    fn from(err: WorkshopError) -> Self {
        ApiError::Workshop(err)
    }
}

impl From<AttendanceError> for ApiError {
    fn from(err: AttendanceError) -> Self {
        ApiError::Attendance(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Participant(err) => match err {
                ParticipantError::NotFound(_) => StatusCode::NOT_FOUND,
                ParticipantError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
                ParticipantError::ValidationFailed { .. }
                | ParticipantError::DuplicateCpf
                | ParticipantError::DuplicateEmail
                | ParticipantError::InstructorOfWorkshops(_) => StatusCode::BAD_REQUEST,
            },
            ApiError::Workshop(err) => match err {
                WorkshopError::NotFound(_)
                | WorkshopError::StudentUnavailable(_)
                | WorkshopError::EnrollmentNotFound { .. } => StatusCode::NOT_FOUND,
                WorkshopError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
                WorkshopError::InstructorUnavailable(_)
                | WorkshopError::AlreadyEnrolled { .. }
                | WorkshopError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            },
            ApiError::Attendance(err) => match err {
                AttendanceError::NotFound(_) => StatusCode::NOT_FOUND,
                AttendanceError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
                AttendanceError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Participant(err) => {
                let mut body = ErrorResponse::new(err.code().to_string(), err.to_string());
                if let ParticipantError::InstructorOfWorkshops(workshops) = err {
                    body.workshops = Some(workshops.clone());
                }
                body
            }
            ApiError::Workshop(err) => ErrorResponse::new(err.code().to_string(), err.to_string()),
            ApiError::Attendance(err) => {
                ErrorResponse::new(err.code().to_string(), err.to_string())
            }
            ApiError::BadRequest(message) => {
                ErrorResponse::new(ErrorCode::ValidationFailed.to_string(), message.clone())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        if status.is_server_error() {
            error!(code = %body.code, error = %body.error, "Request failed");
        }

        (status, Json(body)).into_response()
    }
}
