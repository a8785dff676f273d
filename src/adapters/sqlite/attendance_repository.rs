//! SQLite implementation of AttendanceRepository.
//!
//! `record_batch` runs its DELETE and INSERTs on one connection inside a
//! single transaction. The first statement is a write, so SQLite takes the
//! write lock up front and concurrent batches queue on `busy_timeout`
//! instead of failing with an upgrade deadlock.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, error, warn};

use crate::domain::attendance::{AttendanceEntry, AttendanceRecord};
use crate::domain::foundation::{AttendanceId, DomainError, ParticipantId, WorkshopId};
use crate::ports::{AttendanceRepository, WriteAck};

use super::gateway;
use super::parse_column;

/// SQLite implementation of the AttendanceRepository port.
pub struct SqliteAttendanceRepository {
    pool: SqlitePool,
}

impl SqliteAttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct AttendanceRow {
    id: i64,
    workshop_id: i64,
    participant_id: i64,
    date: NaiveDate,
    status: String,
    notes: Option<String>,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = DomainError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        Ok(AttendanceRecord {
            id: AttendanceId::new(row.id),
            workshop_id: WorkshopId::new(row.workshop_id),
            participant_id: ParticipantId::new(row.participant_id),
            date: row.date,
            status: parse_column("status", &row.status)?,
            notes: row.notes,
        })
    }
}

/// Deletes the batch key and inserts the entries, on an open transaction.
async fn replace_key(
    tx: &mut Transaction<'_, Sqlite>,
    entries: &[AttendanceEntry],
) -> Result<Vec<WriteAck>, DomainError> {
    let Some(first) = entries.first() else {
        return Ok(Vec::new());
    };

    let cleared = gateway::write(
        &mut **tx,
        sqlx::query("DELETE FROM attendance WHERE workshop_id = ? AND date = ?")
            .bind(first.workshop_id.as_i64())
            .bind(first.date),
        "clear attendance for date",
    )
    .await?;
    debug!(
        workshop_id = %first.workshop_id,
        date = %first.date,
        removed = cleared.changes,
        "Cleared previous attendance"
    );

    let mut acks = Vec::with_capacity(entries.len());
    for entry in entries {
        let ack = gateway::write(
            &mut **tx,
            sqlx::query(
                r#"
                INSERT INTO attendance (workshop_id, participant_id, date, status, notes)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(entry.workshop_id.as_i64())
            .bind(entry.participant_id.as_i64())
            .bind(entry.date)
            .bind(entry.status.as_str())
            .bind(entry.notes.as_deref()),
            "insert attendance record",
        )
        .await?;
        acks.push(ack);
    }

    Ok(acks)
}

#[async_trait]
impl AttendanceRepository for SqliteAttendanceRepository {
    async fn record_batch(&self, entries: &[AttendanceEntry]) -> Result<Vec<WriteAck>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        match replace_key(&mut tx, entries).await {
            Ok(acks) => {
                tx.commit()
                    .await
                    .map_err(|e| DomainError::database("commit transaction", e))?;
                debug!(inserted = acks.len(), "Attendance batch committed");
                Ok(acks)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    error!(error = %rollback_err, "Failed to roll back attendance batch");
                }
                warn!(error = %err, "Attendance batch rolled back");
                Err(err)
            }
        }
    }

    async fn find_by_id(&self, id: AttendanceId) -> Result<Option<AttendanceRecord>, DomainError> {
        let row: Option<AttendanceRow> = gateway::read_one(
            &self.pool,
            sqlx::query_as(
                "SELECT id, workshop_id, participant_id, date, status, notes FROM attendance WHERE id = ?",
            )
            .bind(id.as_i64()),
            "fetch attendance record",
        )
        .await?;

        row.map(AttendanceRecord::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<AttendanceRecord>, DomainError> {
        let rows: Vec<AttendanceRow> = gateway::read_many(
            &self.pool,
            sqlx::query_as(
                "SELECT id, workshop_id, participant_id, date, status, notes FROM attendance ORDER BY id",
            ),
            "list attendance records",
        )
        .await?;

        rows.into_iter().map(AttendanceRecord::try_from).collect()
    }

    async fn find_by_key(
        &self,
        workshop_id: WorkshopId,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, DomainError> {
        let rows: Vec<AttendanceRow> = gateway::read_many(
            &self.pool,
            sqlx::query_as(
                r#"
                SELECT id, workshop_id, participant_id, date, status, notes
                FROM attendance
                WHERE workshop_id = ? AND date = ?
                ORDER BY id
                "#,
            )
            .bind(workshop_id.as_i64())
            .bind(date),
            "list attendance for date",
        )
        .await?;

        rows.into_iter().map(AttendanceRecord::try_from).collect()
    }

    async fn update(&self, record: &AttendanceRecord) -> Result<WriteAck, DomainError> {
        gateway::write(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE attendance
                SET workshop_id = ?, participant_id = ?, date = ?, status = ?, notes = ?
                WHERE id = ?
                "#,
            )
            .bind(record.workshop_id.as_i64())
            .bind(record.participant_id.as_i64())
            .bind(record.date)
            .bind(record.status.as_str())
            .bind(record.notes.as_deref())
            .bind(record.id.as_i64()),
            "update attendance record",
        )
        .await
    }

    async fn delete(&self, id: AttendanceId) -> Result<WriteAck, DomainError> {
        gateway::write(
            &self.pool,
            sqlx::query("DELETE FROM attendance WHERE id = ?").bind(id.as_i64()),
            "delete attendance record",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{fixtures, Database};
    use crate::domain::attendance::AttendanceStatus;

    struct Seeded {
        db: Database,
        repo: SqliteAttendanceRepository,
        workshop: WorkshopId,
        ana: ParticipantId,
        bia: ParticipantId,
    }

    async fn setup() -> Seeded {
        let db = Database::in_memory().await.unwrap();
        let instructor = fixtures::instructor(&db, "Carlos", "11122233344").await;
        let workshop = fixtures::workshop(&db, "Robotics", instructor).await;
        let ana = fixtures::student(&db, "Ana", "12345678901").await;
        let bia = fixtures::student(&db, "Bia", "10987654321").await;
        let repo = SqliteAttendanceRepository::new(db.pool().clone());
        Seeded {
            db,
            repo,
            workshop,
            ana,
            bia,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(
        workshop: WorkshopId,
        participant: ParticipantId,
        date: &str,
        status: AttendanceStatus,
    ) -> AttendanceEntry {
        AttendanceEntry {
            workshop_id: workshop,
            participant_id: participant,
            date: day(date),
            status,
            notes: None,
        }
    }

    #[tokio::test]
    async fn batch_inserts_in_order_with_increasing_ids() {
        let s = setup().await;
        let acks = s
            .repo
            .record_batch(&[
                entry(s.workshop, s.ana, "2025-01-10", AttendanceStatus::Present),
                entry(s.workshop, s.bia, "2025-01-10", AttendanceStatus::Absent),
            ])
            .await
            .unwrap();

        assert_eq!(acks.len(), 2);
        assert!(acks.iter().all(|a| a.changes == 1));
        assert!(acks[0].id < acks[1].id);

        let stored = s.repo.find_by_key(s.workshop, day("2025-01-10")).await.unwrap();
        assert_eq!(stored[0].participant_id, s.ana);
        assert_eq!(stored[1].status, AttendanceStatus::Absent);
    }

    #[tokio::test]
    async fn resubmitting_a_date_replaces_only_that_date() {
        let s = setup().await;
        s.repo
            .record_batch(&[
                entry(s.workshop, s.ana, "2025-01-10", AttendanceStatus::Present),
                entry(s.workshop, s.bia, "2025-01-10", AttendanceStatus::Present),
            ])
            .await
            .unwrap();
        s.repo
            .record_batch(&[entry(s.workshop, s.ana, "2025-01-11", AttendanceStatus::Present)])
            .await
            .unwrap();

        s.repo
            .record_batch(&[entry(s.workshop, s.bia, "2025-01-10", AttendanceStatus::Absent)])
            .await
            .unwrap();

        let replaced = s.repo.find_by_key(s.workshop, day("2025-01-10")).await.unwrap();
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].participant_id, s.bia);
        assert_eq!(replaced[0].status, AttendanceStatus::Absent);

        let untouched = s.repo.find_by_key(s.workshop, day("2025-01-11")).await.unwrap();
        assert_eq!(untouched.len(), 1);
    }

    #[tokio::test]
    async fn empty_batch_changes_nothing() {
        let s = setup().await;
        s.repo
            .record_batch(&[entry(s.workshop, s.ana, "2025-01-10", AttendanceStatus::Present)])
            .await
            .unwrap();

        let acks = s.repo.record_batch(&[]).await.unwrap();

        assert!(acks.is_empty());
        assert_eq!(s.repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_insert_rolls_back_the_delete() {
        let s = setup().await;
        s.repo
            .record_batch(&[entry(s.workshop, s.ana, "2025-01-10", AttendanceStatus::Present)])
            .await
            .unwrap();

        let err = s
            .repo
            .record_batch(&[
                entry(s.workshop, s.bia, "2025-01-10", AttendanceStatus::Present),
                entry(s.workshop, ParticipantId::new(999), "2025-01-10", AttendanceStatus::Present),
            ])
            .await
            .unwrap_err();
        assert!(err.message.starts_with("Failed to insert attendance record"));

        let stored = s.repo.find_by_key(s.workshop, day("2025-01-10")).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].participant_id, s.ana);
    }

    #[tokio::test]
    async fn failed_delete_leaves_store_untouched() {
        let s = setup().await;
        s.repo
            .record_batch(&[entry(s.workshop, s.ana, "2025-01-10", AttendanceStatus::Present)])
            .await
            .unwrap();
        sqlx::query(
            "CREATE TRIGGER block_delete BEFORE DELETE ON attendance BEGIN SELECT RAISE(ABORT, 'delete blocked'); END",
        )
        .execute(s.db.pool())
        .await
        .unwrap();

        let err = s
            .repo
            .record_batch(&[entry(s.workshop, s.bia, "2025-01-10", AttendanceStatus::Absent)])
            .await
            .unwrap_err();
        assert!(err.message.contains("delete blocked"));

        let all = s.repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].participant_id, s.ana);
    }

    #[tokio::test]
    async fn update_and_delete_single_records() {
        let s = setup().await;
        let acks = s
            .repo
            .record_batch(&[entry(s.workshop, s.ana, "2025-01-10", AttendanceStatus::Present)])
            .await
            .unwrap();
        let id = AttendanceId::new(acks[0].id);

        let mut record = s.repo.find_by_id(id).await.unwrap().unwrap();
        record.status = AttendanceStatus::Absent;
        record.notes = Some("sick".to_string());
        assert_eq!(s.repo.update(&record).await.unwrap().changes, 1);
        assert_eq!(s.repo.find_by_id(id).await.unwrap(), Some(record));

        assert_eq!(s.repo.delete(id).await.unwrap().changes, 1);
        assert!(s.repo.delete(id).await.unwrap().is_noop());
        assert!(s.repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn legacy_late_rows_are_readable() {
        let s = setup().await;
        sqlx::query(
            "INSERT INTO attendance (workshop_id, participant_id, date, status) VALUES (?, ?, '2024-12-01', 'late')",
        )
        .bind(s.workshop.as_i64())
        .bind(s.ana.as_i64())
        .execute(s.db.pool())
        .await
        .unwrap();

        let all = s.repo.list_all().await.unwrap();
        assert_eq!(all[0].status, AttendanceStatus::Late);
    }
}
