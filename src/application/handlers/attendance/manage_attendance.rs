//! Single-record attendance handlers: get, list, update and delete.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::attendance::{AttendanceError, AttendanceRecord, AttendanceStatus};
use crate::domain::foundation::{AttendanceId, ParticipantId, WorkshopId};
use crate::ports::AttendanceRepository;

#[derive(Debug, Clone)]
pub struct GetAttendanceQuery {
    pub id: AttendanceId,
}

pub struct GetAttendanceHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl GetAttendanceHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAttendanceQuery) -> Result<AttendanceRecord, AttendanceError> {
        self.repository
            .find_by_id(query.id)
            .await?
            .ok_or(AttendanceError::NotFound(query.id))
    }
}

pub struct ListAttendanceHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl ListAttendanceHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        Ok(self.repository.list_all().await?)
    }
}

/// Command carrying the fields to change; `None` leaves a field as is.
///
/// `notes: Some(None)` clears the notes.
#[derive(Debug, Clone)]
pub struct UpdateAttendanceCommand {
    pub id: AttendanceId,
    pub workshop_id: Option<WorkshopId>,
    pub participant_id: Option<ParticipantId>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
    pub notes: Option<Option<String>>,
}

impl UpdateAttendanceCommand {
    pub fn new(id: AttendanceId) -> Self {
        Self {
            id,
            workshop_id: None,
            participant_id: None,
            date: None,
            status: None,
            notes: None,
        }
    }
}

/// Handler for correcting a single attendance record.
pub struct UpdateAttendanceHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl UpdateAttendanceHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateAttendanceCommand) -> Result<AttendanceRecord, AttendanceError> {
        if let Some(status) = cmd.status {
            status.ensure_writable()?;
        }

        let mut record = self
            .repository
            .find_by_id(cmd.id)
            .await?
            .ok_or(AttendanceError::NotFound(cmd.id))?;

        if let Some(workshop_id) = cmd.workshop_id {
            record.workshop_id = workshop_id;
        }
        if let Some(participant_id) = cmd.participant_id {
            record.participant_id = participant_id;
        }
        if let Some(date) = cmd.date {
            record.date = date;
        }
        if let Some(status) = cmd.status {
            record.status = status;
        }
        if let Some(notes) = cmd.notes {
            record.notes = notes;
        }

        let ack = self.repository.update(&record).await?;
        if ack.is_noop() {
            return Err(AttendanceError::NotFound(cmd.id));
        }
        info!(attendance_id = %cmd.id, "Attendance record updated");
        Ok(record)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteAttendanceCommand {
    pub id: AttendanceId,
}

/// Handler for hard-deleting a single attendance record.
pub struct DeleteAttendanceHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl DeleteAttendanceHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAttendanceCommand) -> Result<(), AttendanceError> {
        let ack = self.repository.delete(cmd.id).await?;
        if ack.is_noop() {
            return Err(AttendanceError::NotFound(cmd.id));
        }
        info!(attendance_id = %cmd.id, "Attendance record deleted");
        Ok(())
    }
}
