//! Workshop repository port.
//!
//! Covers workshops and the enrollments that link students to them.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ParticipantId, WorkshopId};
use crate::domain::participant::Participant;
use crate::domain::workshop::{Enrollment, NewWorkshop, Workshop, WorkshopRef, WorkshopStatus};

use super::WriteAck;

/// Repository port for workshops and enrollments.
#[async_trait]
pub trait WorkshopRepository: Send + Sync {
    /// Insert a workshop and return its id.
    async fn create(&self, workshop: &NewWorkshop) -> Result<WorkshopId, DomainError>;

    /// Find a workshop with its instructor name.
    async fn find_by_id(&self, id: WorkshopId) -> Result<Option<Workshop>, DomainError>;

    /// List workshops, optionally restricted to one status.
    async fn list(&self, status: Option<WorkshopStatus>) -> Result<Vec<Workshop>, DomainError>;

    /// Persist every editable column of an existing workshop.
    async fn update(&self, workshop: &Workshop) -> Result<WriteAck, DomainError>;

    /// Change the lifecycle status.
    async fn set_status(&self, id: WorkshopId, status: WorkshopStatus) -> Result<WriteAck, DomainError>;

    /// Workshops (any status) that reference the participant as instructor.
    async fn find_by_instructor(
        &self,
        instructor_id: ParticipantId,
    ) -> Result<Vec<WorkshopRef>, DomainError>;

    /// Students enrolled in a workshop.
    async fn list_participants(&self, id: WorkshopId) -> Result<Vec<Participant>, DomainError>;

    /// Look up a single enrollment.
    async fn find_enrollment(
        &self,
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    ) -> Result<Option<Enrollment>, DomainError>;

    /// Insert an enrollment.
    ///
    /// # Errors
    ///
    /// - `AlreadyEnrolled` when the pair already exists
    async fn enroll(&self, enrollment: &Enrollment) -> Result<WriteAck, DomainError>;

    /// Remove an enrollment; `changes == 0` when there was none.
    async fn unenroll(
        &self,
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    ) -> Result<WriteAck, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workshop_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn WorkshopRepository) {}
    }
}
