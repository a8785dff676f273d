//! Workshop query handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::WorkshopId;
use crate::domain::participant::Participant;
use crate::domain::workshop::{Workshop, WorkshopError, WorkshopStatus};
use crate::ports::{AttendanceReader, WorkshopAttendanceView, WorkshopRepository};

use super::load_workshop;

#[derive(Debug, Clone)]
pub struct GetWorkshopQuery {
    pub id: WorkshopId,
}

pub struct GetWorkshopHandler {
    workshops: Arc<dyn WorkshopRepository>,
}

impl GetWorkshopHandler {
    pub fn new(workshops: Arc<dyn WorkshopRepository>) -> Self {
        Self { workshops }
    }

    pub async fn handle(&self, query: GetWorkshopQuery) -> Result<Workshop, WorkshopError> {
        load_workshop(self.workshops.as_ref(), query.id).await
    }
}

/// Query for workshops; `status` is the raw filter.
#[derive(Debug, Clone, Default)]
pub struct ListWorkshopsQuery {
    pub status: Option<String>,
}

pub struct ListWorkshopsHandler {
    workshops: Arc<dyn WorkshopRepository>,
}

impl ListWorkshopsHandler {
    pub fn new(workshops: Arc<dyn WorkshopRepository>) -> Self {
        Self { workshops }
    }

    pub async fn handle(&self, query: ListWorkshopsQuery) -> Result<Vec<Workshop>, WorkshopError> {
        let status = query
            .status
            .map(|s| s.parse::<WorkshopStatus>())
            .transpose()?;

        Ok(self.workshops.list(status).await?)
    }
}

/// Query for the students enrolled in a workshop.
#[derive(Debug, Clone)]
pub struct ListWorkshopParticipantsQuery {
    pub workshop_id: WorkshopId,
}

pub struct ListWorkshopParticipantsHandler {
    workshops: Arc<dyn WorkshopRepository>,
}

impl ListWorkshopParticipantsHandler {
    pub fn new(workshops: Arc<dyn WorkshopRepository>) -> Self {
        Self { workshops }
    }

    pub async fn handle(
        &self,
        query: ListWorkshopParticipantsQuery,
    ) -> Result<Vec<Participant>, WorkshopError> {
        load_workshop(self.workshops.as_ref(), query.workshop_id).await?;
        Ok(self.workshops.list_participants(query.workshop_id).await?)
    }
}

/// Query for a workshop's attendance, optionally for one date.
#[derive(Debug, Clone)]
pub struct GetWorkshopAttendanceQuery {
    pub workshop_id: WorkshopId,
    pub date: Option<NaiveDate>,
}

pub struct GetWorkshopAttendanceHandler {
    workshops: Arc<dyn WorkshopRepository>,
    reader: Arc<dyn AttendanceReader>,
}

impl GetWorkshopAttendanceHandler {
    pub fn new(workshops: Arc<dyn WorkshopRepository>, reader: Arc<dyn AttendanceReader>) -> Self {
        Self { workshops, reader }
    }

    pub async fn handle(
        &self,
        query: GetWorkshopAttendanceQuery,
    ) -> Result<Vec<WorkshopAttendanceView>, WorkshopError> {
        load_workshop(self.workshops.as_ref(), query.workshop_id).await?;
        Ok(self
            .reader
            .list_for_workshop(query.workshop_id, query.date)
            .await?)
    }
}
