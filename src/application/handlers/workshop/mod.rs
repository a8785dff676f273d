//! Workshop handlers.
//!
//! ## Commands
//! - Creating and updating workshops
//! - Status changes (finishing a workshop is its soft delete)
//! - Enrolling and unenrolling students
//!
//! ## Queries
//! - Get / list workshops
//! - Enrolled participants and attendance of a workshop

mod change_workshop_status;
mod create_workshop;
mod enrollment;
mod queries;
mod update_workshop;

// Commands
pub use change_workshop_status::{ChangeWorkshopStatusCommand, ChangeWorkshopStatusHandler};
pub use create_workshop::{CreateWorkshopCommand, CreateWorkshopHandler};
pub use enrollment::{
    EnrollParticipantCommand, EnrollParticipantHandler, UnenrollParticipantCommand,
    UnenrollParticipantHandler,
};
pub use update_workshop::{UpdateWorkshopCommand, UpdateWorkshopHandler};

// Queries
pub use queries::{
    GetWorkshopAttendanceHandler, GetWorkshopAttendanceQuery, GetWorkshopHandler, GetWorkshopQuery,
    ListWorkshopParticipantsHandler, ListWorkshopParticipantsQuery, ListWorkshopsHandler,
    ListWorkshopsQuery,
};

use crate::domain::foundation::{ParticipantId, WorkshopId};
use crate::domain::workshop::{Workshop, WorkshopError};
use crate::ports::{ParticipantRepository, WorkshopRepository};

/// Fails unless the id references an active instructor.
async fn ensure_active_instructor(
    participants: &dyn ParticipantRepository,
    id: ParticipantId,
) -> Result<(), WorkshopError> {
    match participants.find_by_id(id).await? {
        Some(participant) if participant.is_active_instructor() => Ok(()),
        _ => Err(WorkshopError::InstructorUnavailable(id)),
    }
}

/// Loads a workshop or reports it missing.
async fn load_workshop(
    workshops: &dyn WorkshopRepository,
    id: WorkshopId,
) -> Result<Workshop, WorkshopError> {
    workshops
        .find_by_id(id)
        .await?
        .ok_or(WorkshopError::NotFound(id))
}
