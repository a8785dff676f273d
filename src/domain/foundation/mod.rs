//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the status state machine trait and
//! the error vocabulary shared by participants, workshops and attendance.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AttendanceId, ParticipantId, WorkshopId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
