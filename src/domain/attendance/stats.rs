//! Attendance statistics for one participant.

use serde::{Deserialize, Serialize};

/// Aggregate counts over every attendance record of a participant.
///
/// `total_classes` counts all records, including legacy `late` ones, so
/// `presences + absences` may be lower than the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceStats {
    pub total_classes: u64,
    pub presences: u64,
    pub absences: u64,
    pub attendance_percentage: u32,
}

impl AttendanceStats {
    /// Builds stats from raw counts; the percentage is rounded to the
    /// nearest integer and is 0 when there are no records.
    pub fn from_counts(total_classes: u64, presences: u64, absences: u64) -> Self {
        let attendance_percentage = if total_classes == 0 {
            0
        } else {
            ((presences as f64 / total_classes as f64) * 100.0).round() as u32
        };

        Self {
            total_classes,
            presences,
            absences,
            attendance_percentage,
        }
    }
}
