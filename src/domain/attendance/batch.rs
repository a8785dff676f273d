//! A validated attendance submission for one workshop and date.

use chrono::NaiveDate;

use crate::domain::foundation::{ValidationError, WorkshopId};

use super::AttendanceEntry;

/// Non-empty list of entries that all share one (workshop_id, date) key.
///
/// Entries keep their submitted order. Duplicates are not removed: two
/// entries for the same participant produce two rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceBatch {
    entries: Vec<AttendanceEntry>,
}

impl AttendanceBatch {
    /// Validates a submission.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` on `records` if empty or if entries disagree on
    ///   workshop or date
    /// - `InvalidFormat` on `status` if an entry uses the legacy `late` status
    pub fn new(entries: Vec<AttendanceEntry>) -> Result<Self, ValidationError> {
        let first = entries.first().ok_or_else(|| {
            ValidationError::invalid_format(
                "records",
                "Request body must be a non-empty array of attendance records",
            )
        })?;

        let key = first.key();
        for entry in &entries {
            if entry.key() != key {
                return Err(ValidationError::invalid_format(
                    "records",
                    "All attendance records must share the same workshop_id and date",
                ));
            }
            entry.status.ensure_writable()?;
        }

        Ok(Self { entries })
    }

    pub fn workshop_id(&self) -> WorkshopId {
        self.entries[0].workshop_id
    }

    pub fn date(&self) -> NaiveDate {
        self.entries[0].date
    }

    pub fn entries(&self) -> &[AttendanceEntry] {
        &self.entries
    }
}
