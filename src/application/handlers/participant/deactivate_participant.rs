//! DeactivateParticipantHandler - Command handler for soft-deleting participants.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::ParticipantId;
use crate::domain::participant::{ParticipantError, ParticipantStatus};
use crate::ports::{ParticipantRepository, WorkshopRepository};

/// Command to deactivate a participant.
#[derive(Debug, Clone)]
pub struct DeactivateParticipantCommand {
    pub id: ParticipantId,
}

/// Handler for deactivating a participant.
///
/// A participant referenced as instructor by any workshop, active or
/// finished, stays untouched and the blocking workshops are reported.
/// Deactivating an already inactive participant succeeds without a write.
pub struct DeactivateParticipantHandler {
    participants: Arc<dyn ParticipantRepository>,
    workshops: Arc<dyn WorkshopRepository>,
}

impl DeactivateParticipantHandler {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        workshops: Arc<dyn WorkshopRepository>,
    ) -> Self {
        Self {
            participants,
            workshops,
        }
    }

    pub async fn handle(&self, cmd: DeactivateParticipantCommand) -> Result<(), ParticipantError> {
        let mut participant = self
            .participants
            .find_by_id(cmd.id)
            .await?
            .ok_or(ParticipantError::NotFound(cmd.id))?;

        let instructed = self.workshops.find_by_instructor(cmd.id).await?;
        if !instructed.is_empty() {
            return Err(ParticipantError::InstructorOfWorkshops(instructed));
        }

        if participant.status == ParticipantStatus::Inactive {
            debug!(participant_id = %cmd.id, "Participant already inactive");
            return Ok(());
        }

        participant.deactivate()?;
        let ack = self
            .participants
            .set_status(cmd.id, participant.status)
            .await?;
        if ack.is_noop() {
            return Err(ParticipantError::NotFound(cmd.id));
        }

        info!(participant_id = %cmd.id, "Participant deactivated");
        Ok(())
    }
}
