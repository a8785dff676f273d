//! HTTP DTOs for workshop endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::workshop::{CreateWorkshopCommand, UpdateWorkshopCommand};
use crate::domain::foundation::{ParticipantId, WorkshopId};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a workshop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkshopRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub instructor_id: Option<ParticipantId>,
    /// Free-form display string, e.g. "Monday 10:00-12:00".
    #[serde(default)]
    pub schedule: Option<String>,
    /// Defaults to "active".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl From<CreateWorkshopRequest> for CreateWorkshopCommand {
    fn from(request: CreateWorkshopRequest) -> Self {
        Self {
            name: request.name,
            instructor_id: request.instructor_id,
            schedule: request.schedule,
            status: request.status,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

/// Partial update of a workshop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWorkshopRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<ParticipantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl UpdateWorkshopRequest {
    pub fn into_command(self, id: WorkshopId) -> UpdateWorkshopCommand {
        UpdateWorkshopCommand {
            id,
            name: self.name,
            instructor_id: self.instructor_id,
            schedule: self.schedule,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Body of `PUT /api/workshops/:id/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of `POST /api/workshops/:id/participants`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollRequest {
    #[serde(default, alias = "student_id")]
    pub participant_id: Option<ParticipantId>,
}

/// Query string of `GET /api/workshops`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWorkshopsParams {
    #[serde(default)]
    pub status: Option<String>,
}

/// Query string of `GET /api/workshops/:id/attendance`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkshopAttendanceParams {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Plain confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
