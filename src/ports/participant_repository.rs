//! Participant repository port.
//!
//! Defines the contract for persisting and querying participants.
//! Participants are never deleted, only moved to `inactive`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ParticipantId};
use crate::domain::participant::{NewParticipant, Participant, ParticipantStatus, ParticipantType};

use super::WriteAck;

/// Repository port for participants.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Insert a new participant and return the stored row.
    ///
    /// # Errors
    ///
    /// - `DuplicateCpf` / `DuplicateEmail` when a unique index rejects the row
    /// - `DatabaseError` on persistence failure
    async fn create(&self, participant: &NewParticipant) -> Result<Participant, DomainError>;

    /// Find a participant by id, whatever its status.
    async fn find_by_id(&self, id: ParticipantId) -> Result<Option<Participant>, DomainError>;

    /// Find the participant holding a cpf.
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<ParticipantId>, DomainError>;

    /// Find the participant holding an email.
    async fn find_by_email(&self, email: &str) -> Result<Option<ParticipantId>, DomainError>;

    /// List active participants, optionally restricted to one type.
    async fn list_active(
        &self,
        participant_type: Option<ParticipantType>,
    ) -> Result<Vec<Participant>, DomainError>;

    /// Persist name, email, phone, type and ra of an existing participant.
    async fn update(&self, participant: &Participant) -> Result<WriteAck, DomainError>;

    /// Change the lifecycle status.
    async fn set_status(
        &self,
        id: ParticipantId,
        status: ParticipantStatus,
    ) -> Result<WriteAck, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ParticipantRepository) {}
    }
}
