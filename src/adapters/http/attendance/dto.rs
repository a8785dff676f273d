//! HTTP DTOs for attendance endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::handlers::attendance::UpdateAttendanceCommand;
use crate::domain::attendance::{AttendanceEntry, AttendanceError, AttendanceStatus};
use crate::domain::foundation::{AttendanceId, ParticipantId, WorkshopId};

/// Message used whenever the POST body is not a usable array.
pub const BATCH_BODY_MESSAGE: &str =
    "Request body must be a non-empty array of attendance records";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One element of the `POST /api/attendance` array.
///
/// Older clients send the participant as `student_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntryRequest {
    #[serde(default)]
    pub workshop_id: Option<WorkshopId>,
    #[serde(default, alias = "student_id")]
    pub participant_id: Option<ParticipantId>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AttendanceEntryRequest {
    pub fn into_entry(self) -> Result<AttendanceEntry, AttendanceError> {
        let workshop_id = self.workshop_id.ok_or_else(|| required("workshop_id"))?;
        let participant_id = self.participant_id.ok_or_else(|| required("participant_id"))?;
        let date = self.date.ok_or_else(|| required("date"))?;
        let status = self
            .status
            .ok_or_else(|| required("status"))?
            .parse::<AttendanceStatus>()?;

        Ok(AttendanceEntry {
            workshop_id,
            participant_id,
            date,
            status,
            notes: self.notes,
        })
    }
}

/// Partial correction of one record.
///
/// `notes: null` clears the notes; an absent `notes` key keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAttendanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workshop_id: Option<WorkshopId>,
    #[serde(default, alias = "student_id", skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<ParticipantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}

impl UpdateAttendanceRequest {
    pub fn into_command(self, id: AttendanceId) -> Result<UpdateAttendanceCommand, AttendanceError> {
        Ok(UpdateAttendanceCommand {
            id,
            workshop_id: self.workshop_id,
            participant_id: self.participant_id,
            date: self.date,
            status: self
                .status
                .map(|s| s.parse::<AttendanceStatus>())
                .transpose()?,
            notes: self.notes,
        })
    }
}

fn required(field: &str) -> AttendanceError {
    AttendanceError::validation(field, "is required")
}

/// Distinguishes an explicit `null` from a missing key.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
