//! CreateWorkshopHandler - Command handler for creating workshops.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::ParticipantId;
use crate::domain::workshop::{NewWorkshop, Workshop, WorkshopError};
use crate::ports::{ParticipantRepository, WorkshopRepository};

use super::{ensure_active_instructor, load_workshop};

/// Command carrying raw workshop input.
#[derive(Debug, Clone, Default)]
pub struct CreateWorkshopCommand {
    pub name: Option<String>,
    pub instructor_id: Option<ParticipantId>,
    pub schedule: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Handler for creating a workshop led by an active instructor.
pub struct CreateWorkshopHandler {
    workshops: Arc<dyn WorkshopRepository>,
    participants: Arc<dyn ParticipantRepository>,
}

impl CreateWorkshopHandler {
    pub fn new(
        workshops: Arc<dyn WorkshopRepository>,
        participants: Arc<dyn ParticipantRepository>,
    ) -> Self {
        Self {
            workshops,
            participants,
        }
    }

    pub async fn handle(&self, cmd: CreateWorkshopCommand) -> Result<Workshop, WorkshopError> {
        let new = NewWorkshop::new(
            cmd.name,
            cmd.instructor_id,
            cmd.schedule,
            cmd.status,
            cmd.start_date,
            cmd.end_date,
        )?;
        ensure_active_instructor(self.participants.as_ref(), new.instructor_id).await?;

        let id = self.workshops.create(&new).await?;
        info!(workshop_id = %id, instructor_id = %new.instructor_id, "Workshop created");

        load_workshop(self.workshops.as_ref(), id).await
    }
}
