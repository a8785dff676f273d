//! Participant handlers.
//!
//! ## Commands
//! - Registering a participant
//! - Partial updates
//! - Deactivation (soft delete)
//!
//! ## Queries
//! - Get / list participants
//! - Attendance statistics and history

mod deactivate_participant;
mod queries;
mod register_participant;
mod update_participant;

// Commands
pub use deactivate_participant::{DeactivateParticipantCommand, DeactivateParticipantHandler};
pub use register_participant::{RegisterParticipantCommand, RegisterParticipantHandler};
pub use update_participant::{UpdateParticipantCommand, UpdateParticipantHandler};

// Queries
pub use queries::{
    GetAttendanceHistoryHandler, GetAttendanceHistoryQuery, GetAttendanceStatsHandler,
    GetAttendanceStatsQuery, GetParticipantHandler, GetParticipantQuery, ListParticipantsHandler,
    ListParticipantsQuery,
};
