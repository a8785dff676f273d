//! SQLite implementation of AttendanceReader.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::domain::attendance::{AttendanceRecord, AttendanceStats};
use crate::domain::foundation::{AttendanceId, DomainError, ParticipantId, WorkshopId};
use crate::ports::{AttendanceHistoryEntry, AttendanceReader, WorkshopAttendanceView};

use super::attendance_repository::AttendanceRow;
use super::gateway;
use super::parse_column;

/// SQLite implementation of the AttendanceReader port.
pub struct SqliteAttendanceReader {
    pool: SqlitePool,
}

impl SqliteAttendanceReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct WorkshopAttendanceRow {
    #[sqlx(flatten)]
    record: AttendanceRow,
    participant_name: String,
    email: String,
    phone: String,
}

#[derive(Debug, sqlx::FromRow)]
struct HistoryRow {
    id: i64,
    workshop_name: String,
    date: NaiveDate,
    status: String,
    notes: Option<String>,
}

#[async_trait]
impl AttendanceReader for SqliteAttendanceReader {
    async fn list_for_workshop(
        &self,
        workshop_id: WorkshopId,
        date: Option<NaiveDate>,
    ) -> Result<Vec<WorkshopAttendanceView>, DomainError> {
        let rows: Vec<WorkshopAttendanceRow> = gateway::read_many(
            &self.pool,
            sqlx::query_as(
                r#"
                SELECT a.id, a.workshop_id, a.participant_id, a.date, a.status, a.notes,
                       p.name AS participant_name, p.email, p.phone
                FROM attendance a
                JOIN participants p ON p.id = a.participant_id
                WHERE a.workshop_id = ?1 AND (?2 IS NULL OR a.date = ?2)
                ORDER BY a.date DESC, p.name, a.id
                "#,
            )
            .bind(workshop_id.as_i64())
            .bind(date),
            "list workshop attendance",
        )
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(WorkshopAttendanceView {
                    record: AttendanceRecord::try_from(row.record)?,
                    participant_name: row.participant_name,
                    email: row.email,
                    phone: row.phone,
                })
            })
            .collect()
    }

    async fn stats_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<AttendanceStats, DomainError> {
        let (total, presences, absences): (i64, i64, i64) = gateway::read_one(
            &self.pool,
            sqlx::query_as(
                r#"
                SELECT COUNT(*),
                       COALESCE(SUM(CASE WHEN status = 'present' THEN 1 ELSE 0 END), 0),
                       COALESCE(SUM(CASE WHEN status = 'absent' THEN 1 ELSE 0 END), 0)
                FROM attendance
                WHERE participant_id = ?
                "#,
            )
            .bind(participant_id.as_i64()),
            "compute attendance stats",
        )
        .await?
        .unwrap_or((0, 0, 0));

        Ok(AttendanceStats::from_counts(
            total.max(0) as u64,
            presences.max(0) as u64,
            absences.max(0) as u64,
        ))
    }

    async fn history_for_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<Vec<AttendanceHistoryEntry>, DomainError> {
        let rows: Vec<HistoryRow> = gateway::read_many(
            &self.pool,
            sqlx::query_as(
                r#"
                SELECT a.id, w.name AS workshop_name, a.date, a.status, a.notes
                FROM attendance a
                JOIN workshops w ON w.id = a.workshop_id
                WHERE a.participant_id = ?
                ORDER BY a.date DESC, a.id DESC
                "#,
            )
            .bind(participant_id.as_i64()),
            "list attendance history",
        )
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(AttendanceHistoryEntry {
                    id: AttendanceId::new(row.id),
                    workshop_name: row.workshop_name,
                    date: row.date,
                    status: parse_column("status", &row.status)?,
                    notes: row.notes,
                })
            })
            .collect()
    }
}
