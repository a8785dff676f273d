//! RegisterParticipantHandler - Command handler for registering participants.

use std::sync::Arc;

use tracing::info;

use crate::domain::participant::{NewParticipant, Participant, ParticipantError};
use crate::ports::ParticipantRepository;

/// Command carrying raw registration input.
#[derive(Debug, Clone, Default)]
pub struct RegisterParticipantCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub participant_type: Option<String>,
    pub ra: Option<String>,
    pub cpf: Option<String>,
}

/// Handler for registering a new participant.
///
/// Format validation runs first, then the cpf and email uniqueness checks,
/// and only then the insert.
pub struct RegisterParticipantHandler {
    repository: Arc<dyn ParticipantRepository>,
}

impl RegisterParticipantHandler {
    pub fn new(repository: Arc<dyn ParticipantRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RegisterParticipantCommand) -> Result<Participant, ParticipantError> {
        let new = NewParticipant::new(
            cmd.name,
            cmd.email,
            cmd.phone,
            cmd.participant_type,
            cmd.ra,
            cmd.cpf,
        )?;

        if self.repository.find_by_cpf(&new.cpf).await?.is_some() {
            return Err(ParticipantError::DuplicateCpf);
        }
        if self.repository.find_by_email(&new.email).await?.is_some() {
            return Err(ParticipantError::DuplicateEmail);
        }

        let participant = self.repository.create(&new).await?;
        info!(
            participant_id = %participant.id,
            participant_type = %participant.participant_type,
            "Participant registered"
        );
        Ok(participant)
    }
}
