//! Enrollment handlers - adding and removing students from workshops.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{ErrorCode, ParticipantId, ValidationError, WorkshopId};
use crate::domain::workshop::{Enrollment, WorkshopError};
use crate::ports::{ParticipantRepository, WorkshopRepository};

use super::load_workshop;

/// Command to enroll a student; `participant_id` is required.
#[derive(Debug, Clone)]
pub struct EnrollParticipantCommand {
    pub workshop_id: WorkshopId,
    pub participant_id: Option<ParticipantId>,
}

/// Handler for enrolling an active student in a workshop.
pub struct EnrollParticipantHandler {
    workshops: Arc<dyn WorkshopRepository>,
    participants: Arc<dyn ParticipantRepository>,
}

impl EnrollParticipantHandler {
    pub fn new(
        workshops: Arc<dyn WorkshopRepository>,
        participants: Arc<dyn ParticipantRepository>,
    ) -> Self {
        Self {
            workshops,
            participants,
        }
    }

    pub async fn handle(&self, cmd: EnrollParticipantCommand) -> Result<Enrollment, WorkshopError> {
        let participant_id = cmd
            .participant_id
            .ok_or_else(|| ValidationError::empty_field("participant_id"))?;
        load_workshop(self.workshops.as_ref(), cmd.workshop_id).await?;

        match self.participants.find_by_id(participant_id).await? {
            Some(participant) if participant.is_active_student() => {}
            _ => return Err(WorkshopError::StudentUnavailable(participant_id)),
        }

        let already_enrolled = WorkshopError::AlreadyEnrolled {
            workshop_id: cmd.workshop_id,
            participant_id,
        };
        if self
            .workshops
            .find_enrollment(cmd.workshop_id, participant_id)
            .await?
            .is_some()
        {
            return Err(already_enrolled);
        }

        let enrollment = Enrollment::new(cmd.workshop_id, participant_id);
        self.workshops.enroll(&enrollment).await.map_err(|err| {
            if err.code == ErrorCode::AlreadyEnrolled {
                already_enrolled
            } else {
                err.into()
            }
        })?;

        info!(
            workshop_id = %cmd.workshop_id,
            participant_id = %participant_id,
            "Student enrolled"
        );
        Ok(enrollment)
    }
}

/// Command to remove a student from a workshop.
#[derive(Debug, Clone)]
pub struct UnenrollParticipantCommand {
    pub workshop_id: WorkshopId,
    pub participant_id: ParticipantId,
}

/// Handler for removing an enrollment.
pub struct UnenrollParticipantHandler {
    workshops: Arc<dyn WorkshopRepository>,
}

impl UnenrollParticipantHandler {
    pub fn new(workshops: Arc<dyn WorkshopRepository>) -> Self {
        Self { workshops }
    }

    pub async fn handle(&self, cmd: UnenrollParticipantCommand) -> Result<(), WorkshopError> {
        let ack = self
            .workshops
            .unenroll(cmd.workshop_id, cmd.participant_id)
            .await?;
        if ack.is_noop() {
            return Err(WorkshopError::EnrollmentNotFound {
                workshop_id: cmd.workshop_id,
                participant_id: cmd.participant_id,
            });
        }

        info!(
            workshop_id = %cmd.workshop_id,
            participant_id = %cmd.participant_id,
            "Student unenrolled"
        );
        Ok(())
    }
}
