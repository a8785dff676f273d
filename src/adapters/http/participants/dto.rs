//! HTTP DTOs for participant endpoints.
//!
//! Request fields are all optional so that a missing field is reported as
//! a validation error naming it, not as a JSON decoding failure.

use serde::{Deserialize, Serialize};

use crate::application::handlers::participant::{
    RegisterParticipantCommand, UpdateParticipantCommand,
};
use crate::domain::foundation::ParticipantId;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to register a participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParticipantRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// "student" or "instructor".
    #[serde(default, rename = "type")]
    pub participant_type: Option<String>,
    /// Student registration number.
    #[serde(default)]
    pub ra: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
}

impl From<CreateParticipantRequest> for RegisterParticipantCommand {
    fn from(request: CreateParticipantRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            participant_type: request.participant_type,
            ra: request.ra,
            cpf: request.cpf,
        }
    }
}

/// Partial update; `cpf` cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateParticipantRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub participant_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ra: Option<String>,
}

impl UpdateParticipantRequest {
    pub fn into_command(self, id: ParticipantId) -> UpdateParticipantCommand {
        UpdateParticipantCommand {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            participant_type: self.participant_type,
            ra: self.ra,
        }
    }
}

/// Query string of `GET /api/participants`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParticipantsParams {
    #[serde(default, rename = "type")]
    pub participant_type: Option<String>,
}
