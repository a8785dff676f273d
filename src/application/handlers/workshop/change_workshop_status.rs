//! ChangeWorkshopStatusHandler - Command handler for workshop status changes.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{StateMachine, WorkshopId};
use crate::domain::workshop::{Workshop, WorkshopError, WorkshopStatus};
use crate::ports::WorkshopRepository;

use super::load_workshop;

/// Command to move a workshop to `status` (raw input, `active` or `finished`).
#[derive(Debug, Clone)]
pub struct ChangeWorkshopStatusCommand {
    pub id: WorkshopId,
    pub status: Option<String>,
}

impl ChangeWorkshopStatusCommand {
    /// Soft delete: the workshop is finished, never removed.
    pub fn finish(id: WorkshopId) -> Self {
        Self {
            id,
            status: Some(WorkshopStatus::Finished.as_str().to_string()),
        }
    }
}

/// Handler for changing a workshop's status.
///
/// Setting the status the workshop already has is accepted without a write.
pub struct ChangeWorkshopStatusHandler {
    workshops: Arc<dyn WorkshopRepository>,
}

impl ChangeWorkshopStatusHandler {
    pub fn new(workshops: Arc<dyn WorkshopRepository>) -> Self {
        Self { workshops }
    }

    pub async fn handle(&self, cmd: ChangeWorkshopStatusCommand) -> Result<Workshop, WorkshopError> {
        let target: WorkshopStatus = cmd.status.as_deref().unwrap_or_default().parse()?;
        let workshop = load_workshop(self.workshops.as_ref(), cmd.id).await?;

        if workshop.status == target {
            return Ok(workshop);
        }

        let status = workshop.status.transition_to(target)?;
        let ack = self.workshops.set_status(cmd.id, status).await?;
        if ack.is_noop() {
            return Err(WorkshopError::NotFound(cmd.id));
        }
        info!(workshop_id = %cmd.id, from = %workshop.status, to = %status, "Workshop status changed");

        Ok(Workshop { status, ..workshop })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mocks::{
        participant, MockParticipantRepository, MockWorkshopRepository,
    };
    use crate::domain::foundation::ParticipantId;
    use crate::domain::participant::ParticipantType;

    fn setup_with(
        build: fn(Arc<MockParticipantRepository>) -> MockWorkshopRepository,
    ) -> (Arc<MockWorkshopRepository>, ChangeWorkshopStatusHandler, WorkshopId) {
        let participants = Arc::new(MockParticipantRepository::with_participants(vec![
            participant(1, "Carlos", ParticipantType::Instructor),
        ]));
        let workshops = Arc::new(build(participants));
        let id = workshops.seed("Robotics", ParticipantId::new(1), WorkshopStatus::Active);
        (workshops.clone(), ChangeWorkshopStatusHandler::new(workshops), id)
    }

    fn setup() -> (Arc<MockWorkshopRepository>, ChangeWorkshopStatusHandler, WorkshopId) {
        setup_with(MockWorkshopRepository::new)
    }

    #[tokio::test]
    async fn finish_then_reopen() {
        let (workshops, handler, id) = setup();

        let finished = handler
            .handle(ChangeWorkshopStatusCommand::finish(id))
            .await
            .unwrap();
        assert_eq!(finished.status, WorkshopStatus::Finished);
        assert_eq!(workshops.get(id).unwrap().status, WorkshopStatus::Finished);

        let reopened = handler
            .handle(ChangeWorkshopStatusCommand {
                id,
                status: Some("active".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(reopened.status, WorkshopStatus::Active);
    }

    #[tokio::test]
    async fn same_status_is_accepted_without_a_write() {
        let (_workshops, handler, id) = setup_with(MockWorkshopRepository::failing_writes);
        let workshop = handler
            .handle(ChangeWorkshopStatusCommand {
                id,
                status: Some("active".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(workshop.status, WorkshopStatus::Active);
    }

    #[tokio::test]
    async fn unknown_or_missing_status_is_rejected() {
        let (_workshops, handler, id) = setup();
        for status in [Some("paused".to_string()), None] {
            let err = handler
                .handle(ChangeWorkshopStatusCommand { id, status })
                .await
                .unwrap_err();
            assert_eq!(
                err,
                WorkshopError::validation("status", "Invalid status. Use \"active\" or \"finished\"")
            );
        }
    }

    #[tokio::test]
    async fn unknown_workshop_is_not_found() {
        let (_workshops, handler, _) = setup();
        let id = WorkshopId::new(404);
        assert_eq!(
            handler
                .handle(ChangeWorkshopStatusCommand::finish(id))
                .await
                .unwrap_err(),
            WorkshopError::NotFound(id)
        );
    }
}
