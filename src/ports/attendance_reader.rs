//! Attendance reader port (read side).
//!
//! Joined views and aggregates used by the workshop and participant
//! screens. Kept apart from `AttendanceRepository` so read queries never
//! share a code path with the batch transaction.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::attendance::{AttendanceRecord, AttendanceStats, AttendanceStatus};
use crate::domain::foundation::{AttendanceId, DomainError, ParticipantId, WorkshopId};

/// Reader port for attendance queries.
#[async_trait]
pub trait AttendanceReader: Send + Sync {
    /// Attendance of a workshop with participant contact data, newest date
    /// first; optionally limited to one date.
    async fn list_for_workshop(
        &self,
        workshop_id: WorkshopId,
        date: Option<NaiveDate>,
    ) -> Result<Vec<WorkshopAttendanceView>, DomainError>;

    /// Presence counts over all records of a participant.
    async fn stats_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<AttendanceStats, DomainError>;

    /// Attendance history of a participant, newest date first.
    async fn history_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<Vec<AttendanceHistoryEntry>, DomainError>;
}

/// Attendance record joined with the participant it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopAttendanceView {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub participant_name: String,
    pub email: String,
    pub phone: String,
}

/// One line of a participant's attendance history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceHistoryEntry {
    pub id: AttendanceId,
    pub workshop_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}
