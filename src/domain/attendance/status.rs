//! AttendanceStatus enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Presence marker of an attendance record.
///
/// `Late` only exists in historical data; new records are either present
/// or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        }
    }

    /// Returns true if new records may carry this status.
    pub fn is_writable(&self) -> bool {
        !matches!(self, AttendanceStatus::Late)
    }

    /// Ensures the status may be written.
    pub fn ensure_writable(&self) -> Result<(), ValidationError> {
        if self.is_writable() {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(
                "status",
                "status must be 'present' or 'absent'",
            ))
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown attendance status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_is_readable_but_not_writable() {
        let late: AttendanceStatus = "late".parse().unwrap();
        assert!(!late.is_writable());
        assert!(late.ensure_writable().is_err());
    }

    #[test]
    fn present_and_absent_are_writable() {
        assert!(AttendanceStatus::Present.ensure_writable().is_ok());
        assert!(AttendanceStatus::Absent.ensure_writable().is_ok());
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let status: AttendanceStatus = serde_json::from_str("\"absent\"").unwrap();
        assert_eq!(status, AttendanceStatus::Absent);
    }
}
