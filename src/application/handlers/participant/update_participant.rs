//! UpdateParticipantHandler - Command handler for partial participant updates.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::ParticipantId;
use crate::domain::participant::{Participant, ParticipantChanges, ParticipantError};
use crate::ports::ParticipantRepository;

/// Command carrying the fields to change; `None` leaves a field as is.
#[derive(Debug, Clone)]
pub struct UpdateParticipantCommand {
    pub id: ParticipantId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub participant_type: Option<String>,
    pub ra: Option<String>,
}

impl UpdateParticipantCommand {
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            name: None,
            email: None,
            phone: None,
            participant_type: None,
            ra: None,
        }
    }
}

/// Handler for updating a participant.
pub struct UpdateParticipantHandler {
    repository: Arc<dyn ParticipantRepository>,
}

impl UpdateParticipantHandler {
    pub fn new(repository: Arc<dyn ParticipantRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateParticipantCommand) -> Result<Participant, ParticipantError> {
        let changes = ParticipantChanges::new(
            cmd.name,
            cmd.email,
            cmd.phone,
            cmd.participant_type,
            cmd.ra,
        )?;

        let existing = self
            .repository
            .find_by_id(cmd.id)
            .await?
            .ok_or(ParticipantError::NotFound(cmd.id))?;

        if changes.is_empty() {
            return Ok(existing);
        }

        if let Some(email) = &changes.email {
            match self.repository.find_by_email(email).await? {
                Some(holder) if holder != cmd.id => return Err(ParticipantError::DuplicateEmail),
                _ => {}
            }
        }

        let updated = changes.apply_to(&existing);
        let ack = self.repository.update(&updated).await?;
        if ack.is_noop() {
            return Err(ParticipantError::NotFound(cmd.id));
        }

        info!(participant_id = %cmd.id, "Participant updated");
        Ok(updated)
    }
}
