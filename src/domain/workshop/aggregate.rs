//! Workshop entity and its create/update inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, Timestamp, ValidationError, WorkshopId};

use super::WorkshopStatus;

/// A workshop as read back from storage, with its instructor's name joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    pub id: WorkshopId,
    pub name: String,
    pub instructor_id: ParticipantId,
    pub instructor_name: String,
    pub schedule: Option<String>,
    pub status: WorkshopStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

impl Workshop {
    /// Short reference used when listing workshops that depend on something.
    pub fn to_ref(&self) -> WorkshopRef {
        WorkshopRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Identifier plus display name of a workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopRef {
    pub id: WorkshopId,
    pub name: String,
}

/// Validated input for creating a workshop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkshop {
    pub name: String,
    pub instructor_id: ParticipantId,
    pub schedule: Option<String>,
    pub status: WorkshopStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl NewWorkshop {
    /// Validates raw creation input; status defaults to active.
    pub fn new(
        name: Option<String>,
        instructor_id: Option<ParticipantId>,
        schedule: Option<String>,
        status: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ValidationError::empty_field("name"))?;
        let instructor_id = instructor_id.ok_or_else(|| ValidationError::empty_field("instructor_id"))?;
        let status = match status {
            Some(status) => status.parse()?,
            None => WorkshopStatus::Active,
        };
        validate_period(start_date, end_date)?;

        Ok(Self {
            name,
            instructor_id,
            schedule,
            status,
            start_date,
            end_date,
        })
    }
}

/// Partial update of a workshop; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkshopChanges {
    pub name: Option<String>,
    pub instructor_id: Option<ParticipantId>,
    pub schedule: Option<String>,
    pub status: Option<WorkshopStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl WorkshopChanges {
    pub fn new(
        name: Option<String>,
        instructor_id: Option<ParticipantId>,
        schedule: Option<String>,
        status: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        if let Some(name) = &name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
        }
        let status = status.map(|s| s.parse()).transpose()?;

        Ok(Self {
            name,
            instructor_id,
            schedule,
            status,
            start_date,
            end_date,
        })
    }

    /// Produces the workshop as it looks after the update.
    ///
    /// The resulting period is re-validated since either bound may change.
    pub fn apply_to(&self, workshop: &Workshop) -> Result<Workshop, ValidationError> {
        let mut updated = workshop.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(instructor_id) = self.instructor_id {
            updated.instructor_id = instructor_id;
        }
        if let Some(schedule) = &self.schedule {
            updated.schedule = Some(schedule.clone());
        }
        if let Some(status) = self.status {
            updated.status = status;
        }
        if self.start_date.is_some() {
            updated.start_date = self.start_date;
        }
        if self.end_date.is_some() {
            updated.end_date = self.end_date;
        }
        validate_period(updated.start_date, updated.end_date)?;
        Ok(updated)
    }
}

fn validate_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(ValidationError::invalid_format(
            "end_date",
            "end_date must not be before start_date",
        )),
        _ => Ok(()),
    }
}
