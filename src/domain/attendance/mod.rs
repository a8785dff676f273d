//! Attendance domain module.
//!
//! An attendance record is one participant's presence or absence for one
//! workshop on one date. Attendance for a (workshop, date) pair is always
//! submitted as a whole batch that replaces whatever was recorded before.

mod batch;
mod errors;
mod record;
mod stats;
mod status;

pub use batch::AttendanceBatch;
pub use errors::AttendanceError;
pub use record::{AttendanceEntry, AttendanceRecord};
pub use stats::AttendanceStats;
pub use status::AttendanceStatus;
