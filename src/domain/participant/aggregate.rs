//! Participant entity, registration input and partial updates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, StateMachine, Timestamp, ValidationError};

use super::contact::{validate_cpf, validate_email, validate_phone};
use super::{ParticipantStatus, ParticipantType};

/// A registered participant as stored.
///
/// # Invariants
///
/// - `email` and `cpf` are unique across all participants
/// - `cpf` is exactly 11 digits, `phone` 10-11 digits
/// - An inactive participant never becomes active again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub participant_type: ParticipantType,
    pub ra: Option<String>,
    pub cpf: String,
    pub status: ParticipantStatus,
    pub created_at: Timestamp,
}

impl Participant {
    /// Returns true if this participant may be enrolled in a workshop.
    pub fn is_active_student(&self) -> bool {
        self.participant_type == ParticipantType::Student && self.status.is_active()
    }

    /// Returns true if this participant may lead a workshop.
    pub fn is_active_instructor(&self) -> bool {
        self.participant_type == ParticipantType::Instructor && self.status.is_active()
    }

    /// Soft-deletes the participant.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` on `status` if already inactive
    pub fn deactivate(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(ParticipantStatus::Inactive)?;
        Ok(())
    }
}

/// Validated registration data for a new participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub participant_type: ParticipantType,
    pub ra: Option<String>,
    pub cpf: String,
}

impl NewParticipant {
    /// Validates raw registration input.
    ///
    /// Required fields are checked first (absent and empty are treated the
    /// same), then the email, phone and cpf formats in that order.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        participant_type: Option<String>,
        ra: Option<String>,
        cpf: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let phone = required("phone", phone)?;
        let participant_type = required("type", participant_type)?;
        let cpf = required("cpf", cpf)?;

        validate_email(&email)?;
        validate_phone(&phone)?;
        validate_cpf(&cpf)?;

        Ok(Self {
            name,
            email,
            phone,
            participant_type: participant_type.parse()?,
            ra: ra.filter(|ra| !ra.is_empty()),
            cpf,
        })
    }
}

/// Partial update of a participant; absent fields are left untouched.
///
/// `cpf` is intentionally not part of the update surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub participant_type: Option<ParticipantType>,
    pub ra: Option<String>,
}

impl ParticipantChanges {
    /// Validates only the fields that are present.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        participant_type: Option<String>,
        ra: Option<String>,
    ) -> Result<Self, ValidationError> {
        if let Some(name) = &name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
        }
        if let Some(email) = &email {
            validate_email(email)?;
        }
        if let Some(phone) = &phone {
            validate_phone(phone)?;
        }
        let participant_type = participant_type.map(|t| t.parse()).transpose()?;

        Ok(Self {
            name,
            email,
            phone,
            participant_type,
            ra,
        })
    }

    /// Returns true when the request carried no updatable field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.participant_type.is_none()
            && self.ra.is_none()
    }

    /// Produces the participant as it looks after the update.
    pub fn apply_to(&self, participant: &Participant) -> Participant {
        let mut updated = participant.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(email) = &self.email {
            updated.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            updated.phone = phone.clone();
        }
        if let Some(participant_type) = self.participant_type {
            updated.participant_type = participant_type;
        }
        if let Some(ra) = &self.ra {
            updated.ra = Some(ra.clone()).filter(|ra| !ra.is_empty());
        }
        updated
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::empty_field(field)),
    }
}
