//! UpdateWorkshopHandler - Command handler for partial workshop updates.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::foundation::{ParticipantId, WorkshopId};
use crate::domain::workshop::{Workshop, WorkshopChanges, WorkshopError};
use crate::ports::{ParticipantRepository, WorkshopRepository};

use super::{ensure_active_instructor, load_workshop};

/// Command carrying the fields to change; `None` leaves a field as is.
#[derive(Debug, Clone)]
pub struct UpdateWorkshopCommand {
    pub id: WorkshopId,
    pub name: Option<String>,
    pub instructor_id: Option<ParticipantId>,
    pub schedule: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UpdateWorkshopCommand {
    pub fn new(id: WorkshopId) -> Self {
        Self {
            id,
            name: None,
            instructor_id: None,
            schedule: None,
            status: None,
            start_date: None,
            end_date: None,
        }
    }
}

/// Handler for updating a workshop.
///
/// Reassigning the instructor requires the new one to be an active
/// instructor; keeping the current instructor is always allowed.
pub struct UpdateWorkshopHandler {
    workshops: Arc<dyn WorkshopRepository>,
    participants: Arc<dyn ParticipantRepository>,
}

impl UpdateWorkshopHandler {
    pub fn new(
        workshops: Arc<dyn WorkshopRepository>,
        participants: Arc<dyn ParticipantRepository>,
    ) -> Self {
        Self {
            workshops,
            participants,
        }
    }

    pub async fn handle(&self, cmd: UpdateWorkshopCommand) -> Result<Workshop, WorkshopError> {
        let changes = WorkshopChanges::new(
            cmd.name,
            cmd.instructor_id,
            cmd.schedule,
            cmd.status,
            cmd.start_date,
            cmd.end_date,
        )?;
        let existing = load_workshop(self.workshops.as_ref(), cmd.id).await?;

        if let Some(instructor_id) = changes.instructor_id {
            if instructor_id != existing.instructor_id {
                ensure_active_instructor(self.participants.as_ref(), instructor_id).await?;
            }
        }

        let updated = changes.apply_to(&existing)?;
        let ack = self.workshops.update(&updated).await?;
        if ack.is_noop() {
            return Err(WorkshopError::NotFound(cmd.id));
        }
        info!(workshop_id = %cmd.id, "Workshop updated");

        load_workshop(self.workshops.as_ref(), cmd.id).await
    }
}
