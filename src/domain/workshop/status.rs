//! WorkshopStatus enum for the workshop lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of a workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkshopStatus {
    #[default]
    Active,
    Finished,
}

impl WorkshopStatus {
    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkshopStatus::Active => "active",
            WorkshopStatus::Finished => "finished",
        }
    }
}

impl StateMachine for WorkshopStatus {
    /// Finished workshops may be reopened.
    fn can_transition_to(&self, target: &Self) -> bool {
        use WorkshopStatus::*;
        matches!((self, target), (Active, Finished) | (Finished, Active))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            WorkshopStatus::Active => vec![WorkshopStatus::Finished],
            WorkshopStatus::Finished => vec![WorkshopStatus::Active],
        }
    }
}

impl fmt::Display for WorkshopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkshopStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(WorkshopStatus::Active),
            "finished" => Ok(WorkshopStatus::Finished),
            _ => Err(ValidationError::invalid_format(
                "status",
                "Invalid status. Use \"active\" or \"finished\"",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_and_finished_parse() {
        assert_eq!("active".parse::<WorkshopStatus>().unwrap(), WorkshopStatus::Active);
        assert_eq!(
            "finished".parse::<WorkshopStatus>().unwrap(),
            WorkshopStatus::Finished
        );
        assert!("archived".parse::<WorkshopStatus>().is_err());
        assert!("".parse::<WorkshopStatus>().is_err());
    }

    #[test]
    fn finished_can_be_reopened() {
        assert!(WorkshopStatus::Finished.can_transition_to(&WorkshopStatus::Active));
        assert!(!WorkshopStatus::Finished.is_terminal());
    }

    #[test]
    fn same_status_is_not_a_transition() {
        assert!(WorkshopStatus::Active
            .transition_to(WorkshopStatus::Active)
            .is_err());
    }
}
