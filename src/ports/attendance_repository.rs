//! Attendance repository port (write side).
//!
//! # Batch recording
//!
//! `record_batch` is the only multi-statement write in the system. For a
//! batch sharing one (workshop_id, date) key it must, atomically:
//!
//! 1. delete every stored record for that key,
//! 2. insert the entries in order,
//! 3. commit, or roll back and return the failure.
//!
//! An empty batch commits an empty transaction and returns no acks.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::attendance::{AttendanceEntry, AttendanceRecord};
use crate::domain::foundation::{AttendanceId, DomainError, WorkshopId};

use super::WriteAck;

/// Repository port for attendance records.
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Replace the attendance stored for the batch's (workshop_id, date).
    ///
    /// Entries are assumed to share the key of the first entry. Returns one
    /// ack per inserted entry, in input order.
    async fn record_batch(&self, entries: &[AttendanceEntry]) -> Result<Vec<WriteAck>, DomainError>;

    /// Find a record by id.
    async fn find_by_id(&self, id: AttendanceId) -> Result<Option<AttendanceRecord>, DomainError>;

    /// Every record, in id order.
    async fn list_all(&self) -> Result<Vec<AttendanceRecord>, DomainError>;

    /// Records stored under one (workshop_id, date) key, in id order.
    async fn find_by_key(
        &self,
        workshop_id: WorkshopId,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, DomainError>;

    /// Overwrite a single record.
    async fn update(&self, record: &AttendanceRecord) -> Result<WriteAck, DomainError>;

    /// Delete a single record; `changes == 0` when there was none.
    async fn delete(&self, id: AttendanceId) -> Result<WriteAck, DomainError>;
}
