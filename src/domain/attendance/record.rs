//! Attendance record and the entry shape used to write one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttendanceId, ParticipantId, WorkshopId};

use super::AttendanceStatus;

/// A stored attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub workshop_id: WorkshopId,
    pub participant_id: ParticipantId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

/// One row to be written; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub workshop_id: WorkshopId,
    pub participant_id: ParticipantId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

impl AttendanceEntry {
    /// The (workshop, date) key this entry is recorded under.
    pub fn key(&self) -> (WorkshopId, NaiveDate) {
        (self.workshop_id, self.date)
    }
}
