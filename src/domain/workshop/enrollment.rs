//! Enrollment of a student in a workshop.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, Timestamp, WorkshopId};

/// Association of a student participant with a workshop.
///
/// Unique per (workshop_id, participant_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub workshop_id: WorkshopId,
    pub participant_id: ParticipantId,
    pub enrolled_at: Timestamp,
}

impl Enrollment {
    pub fn new(workshop_id: WorkshopId, participant_id: ParticipantId) -> Self {
        Self {
            workshop_id,
            participant_id,
            enrolled_at: Timestamp::now(),
        }
    }
}
