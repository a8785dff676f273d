//! Attendance handlers.
//!
//! ## Commands
//! - Recording a batch for one workshop and date
//! - Updating and deleting single records
//!
//! ## Queries
//! - Get / list records

mod manage_attendance;
mod record_attendance;

// Commands
pub use manage_attendance::{
    DeleteAttendanceCommand, DeleteAttendanceHandler, UpdateAttendanceCommand,
    UpdateAttendanceHandler,
};
pub use record_attendance::{RecordAttendanceCommand, RecordAttendanceHandler};

// Queries
pub use manage_attendance::{GetAttendanceHandler, GetAttendanceQuery, ListAttendanceHandler};
