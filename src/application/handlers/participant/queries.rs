//! Participant query handlers.

use std::sync::Arc;

use crate::domain::attendance::AttendanceStats;
use crate::domain::foundation::ParticipantId;
use crate::domain::participant::{Participant, ParticipantError, ParticipantType};
use crate::ports::{AttendanceHistoryEntry, AttendanceReader, ParticipantRepository};

/// Query for one participant, whatever its status.
#[derive(Debug, Clone)]
pub struct GetParticipantQuery {
    pub id: ParticipantId,
}

pub struct GetParticipantHandler {
    repository: Arc<dyn ParticipantRepository>,
}

impl GetParticipantHandler {
    pub fn new(repository: Arc<dyn ParticipantRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetParticipantQuery) -> Result<Participant, ParticipantError> {
        self.repository
            .find_by_id(query.id)
            .await?
            .ok_or(ParticipantError::NotFound(query.id))
    }
}

/// Query for active participants; `participant_type` is the raw filter.
#[derive(Debug, Clone, Default)]
pub struct ListParticipantsQuery {
    pub participant_type: Option<String>,
}

pub struct ListParticipantsHandler {
    repository: Arc<dyn ParticipantRepository>,
}

impl ListParticipantsHandler {
    pub fn new(repository: Arc<dyn ParticipantRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListParticipantsQuery) -> Result<Vec<Participant>, ParticipantError> {
        let participant_type = query
            .participant_type
            .map(|t| t.parse::<ParticipantType>())
            .transpose()?;

        Ok(self.repository.list_active(participant_type).await?)
    }
}

/// Query for a participant's attendance statistics.
///
/// A participant without records, or an unknown id, yields all zeros.
#[derive(Debug, Clone)]
pub struct GetAttendanceStatsQuery {
    pub participant_id: ParticipantId,
}

pub struct GetAttendanceStatsHandler {
    reader: Arc<dyn AttendanceReader>,
}

impl GetAttendanceStatsHandler {
    pub fn new(reader: Arc<dyn AttendanceReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetAttendanceStatsQuery) -> Result<AttendanceStats, ParticipantError> {
        Ok(self.reader.stats_for_participant(query.participant_id).await?)
    }
}

/// Query for a participant's attendance history, newest first.
#[derive(Debug, Clone)]
pub struct GetAttendanceHistoryQuery {
    pub participant_id: ParticipantId,
}

pub struct GetAttendanceHistoryHandler {
    reader: Arc<dyn AttendanceReader>,
}

impl GetAttendanceHistoryHandler {
    pub fn new(reader: Arc<dyn AttendanceReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetAttendanceHistoryQuery,
    ) -> Result<Vec<AttendanceHistoryEntry>, ParticipantError> {
        Ok(self
            .reader
            .history_for_participant(query.participant_id)
            .await?)
    }
}
