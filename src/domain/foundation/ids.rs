//! Strongly-typed identifier value objects.
//!
//! Rows use SQLite integer primary keys; each entity wraps its key in a
//! newtype so a workshop id can never be passed where a participant id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw row id.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| ValidationError::invalid_format($field, "must be an integer id"))
            }
        }
    };
}

define_id!(
    /// Identifier of a participant (student or instructor).
    ParticipantId,
    "participant_id"
);

define_id!(
    /// Identifier of a workshop.
    WorkshopId,
    "workshop_id"
);

define_id!(
    /// Identifier of a single attendance record.
    AttendanceId,
    "attendance_id"
);
