//! Participant type (student or instructor).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Role a participant plays in workshops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantType {
    Student,
    Instructor,
}

impl ParticipantType {
    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantType::Student => "student",
            ParticipantType::Instructor => "instructor",
        }
    }
}

impl fmt::Display for ParticipantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(ParticipantType::Student),
            "instructor" => Ok(ParticipantType::Instructor),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("expected 'student' or 'instructor', got '{}'", other),
            )),
        }
    }
}
