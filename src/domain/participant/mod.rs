//! Participant domain module.
//!
//! A participant is a person record, either a student or an instructor.
//! Participants are never removed: deleting one flips its status to
//! inactive so historical attendance and instructor references survive.

mod aggregate;
mod contact;
mod errors;
mod kind;
mod status;

pub use aggregate::{NewParticipant, Participant, ParticipantChanges};
pub use contact::{validate_cpf, validate_email, validate_phone};
pub use errors::ParticipantError;
pub use kind::ParticipantType;
pub use status::ParticipantStatus;
