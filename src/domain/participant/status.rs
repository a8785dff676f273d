//! ParticipantStatus enum for the participant soft-delete lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    #[default]
    Active,
    Inactive,
}

impl ParticipantStatus {
    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Active => "active",
            ParticipantStatus::Inactive => "inactive",
        }
    }

    /// Returns true if the participant can be enrolled or assigned.
    pub fn is_active(&self) -> bool {
        matches!(self, ParticipantStatus::Active)
    }
}

impl StateMachine for ParticipantStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (ParticipantStatus::Active, ParticipantStatus::Inactive)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ParticipantStatus::Active => vec![ParticipantStatus::Inactive],
            ParticipantStatus::Inactive => vec![],
        }
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ParticipantStatus::Active),
            "inactive" => Ok(ParticipantStatus::Inactive),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown participant status '{}'", other),
            )),
        }
    }
}
