//! RecordAttendanceHandler - Command handler for attendance batch submissions.

use std::sync::Arc;

use tracing::info;

use crate::domain::attendance::{AttendanceBatch, AttendanceEntry, AttendanceError};
use crate::ports::{AttendanceRepository, WriteAck};

/// Command carrying every entry of one submission.
#[derive(Debug, Clone)]
pub struct RecordAttendanceCommand {
    pub entries: Vec<AttendanceEntry>,
}

/// Handler for recording a workshop's attendance on one date.
///
/// The batch replaces whatever was stored for its (workshop, date) key,
/// including records of participants the batch leaves out.
pub struct RecordAttendanceHandler {
    repository: Arc<dyn AttendanceRepository>,
}

impl RecordAttendanceHandler {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordAttendanceCommand) -> Result<Vec<WriteAck>, AttendanceError> {
        let batch = AttendanceBatch::new(cmd.entries)?;

        let acks = self.repository.record_batch(batch.entries()).await?;
        info!(
            workshop_id = %batch.workshop_id(),
            date = %batch.date(),
            records = acks.len(),
            "Attendance recorded"
        );
        Ok(acks)
    }
}
