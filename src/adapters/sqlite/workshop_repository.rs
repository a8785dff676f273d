//! SQLite implementation of WorkshopRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, Timestamp, WorkshopId};
use crate::domain::participant::Participant;
use crate::domain::workshop::{Enrollment, NewWorkshop, Workshop, WorkshopRef, WorkshopStatus};
use crate::ports::{WorkshopRepository, WriteAck};

use super::gateway::{self, unique_violation};
use super::parse_column;
use super::participant_repository::ParticipantRow;

const WORKSHOP_SELECT: &str = r#"
    SELECT w.id, w.name, w.instructor_id, p.name AS instructor_name, w.schedule,
           w.status, w.start_date, w.end_date, w.created_at
    FROM workshops w
    JOIN participants p ON p.id = w.instructor_id
"#;

/// SQLite implementation of the WorkshopRepository port.
pub struct SqliteWorkshopRepository {
    pool: SqlitePool,
}

impl SqliteWorkshopRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct WorkshopRow {
    id: i64,
    name: String,
    instructor_id: i64,
    instructor_name: String,
    schedule: Option<String>,
    status: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl TryFrom<WorkshopRow> for Workshop {
    type Error = DomainError;

    fn try_from(row: WorkshopRow) -> Result<Self, Self::Error> {
        Ok(Workshop {
            id: WorkshopId::new(row.id),
            name: row.name,
            instructor_id: ParticipantId::new(row.instructor_id),
            instructor_name: row.instructor_name,
            schedule: row.schedule,
            status: parse_column("status", &row.status)?,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    workshop_id: i64,
    participant_id: i64,
    created_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            workshop_id: WorkshopId::new(row.workshop_id),
            participant_id: ParticipantId::new(row.participant_id),
            enrolled_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl WorkshopRepository for SqliteWorkshopRepository {
    async fn create(&self, workshop: &NewWorkshop) -> Result<WorkshopId, DomainError> {
        let created_at = Timestamp::now();
        let ack = gateway::write(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO workshops (name, instructor_id, schedule, status, start_date, end_date, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&workshop.name)
            .bind(workshop.instructor_id.as_i64())
            .bind(&workshop.schedule)
            .bind(workshop.status.as_str())
            .bind(workshop.start_date)
            .bind(workshop.end_date)
            .bind(created_at.as_datetime()),
            "insert workshop",
        )
        .await?;

        Ok(WorkshopId::new(ack.id))
    }

    async fn find_by_id(&self, id: WorkshopId) -> Result<Option<Workshop>, DomainError> {
        let sql = format!("{} WHERE w.id = ?", WORKSHOP_SELECT);
        let row: Option<WorkshopRow> = gateway::read_one(
            &self.pool,
            sqlx::query_as(&sql).bind(id.as_i64()),
            "fetch workshop",
        )
        .await?;

        row.map(Workshop::try_from).transpose()
    }

    async fn list(&self, status: Option<WorkshopStatus>) -> Result<Vec<Workshop>, DomainError> {
        let sql = format!(
            "{} WHERE (?1 IS NULL OR w.status = ?1) ORDER BY w.id",
            WORKSHOP_SELECT
        );
        let rows: Vec<WorkshopRow> = gateway::read_many(
            &self.pool,
            sqlx::query_as(&sql).bind(status.map(|s| s.as_str())),
            "list workshops",
        )
        .await?;

        rows.into_iter().map(Workshop::try_from).collect()
    }

    async fn update(&self, workshop: &Workshop) -> Result<WriteAck, DomainError> {
        gateway::write(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE workshops
                SET name = ?, instructor_id = ?, schedule = ?, status = ?, start_date = ?, end_date = ?
                WHERE id = ?
                "#,
            )
            .bind(&workshop.name)
            .bind(workshop.instructor_id.as_i64())
            .bind(&workshop.schedule)
            .bind(workshop.status.as_str())
            .bind(workshop.start_date)
            .bind(workshop.end_date)
            .bind(workshop.id.as_i64()),
            "update workshop",
        )
        .await
    }

    async fn set_status(&self, id: WorkshopId, status: WorkshopStatus) -> Result<WriteAck, DomainError> {
        gateway::write(
            &self.pool,
            sqlx::query("UPDATE workshops SET status = ? WHERE id = ?")
                .bind(status.as_str())
                .bind(id.as_i64()),
            "update workshop status",
        )
        .await
    }

    async fn find_by_instructor(
        &self,
        instructor_id: ParticipantId,
    ) -> Result<Vec<WorkshopRef>, DomainError> {
        let rows: Vec<(i64, String)> = gateway::read_many(
            &self.pool,
            sqlx::query_as("SELECT id, name FROM workshops WHERE instructor_id = ? ORDER BY id")
                .bind(instructor_id.as_i64()),
            "list workshops of instructor",
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| WorkshopRef {
                id: WorkshopId::new(id),
                name,
            })
            .collect())
    }

    async fn list_participants(&self, id: WorkshopId) -> Result<Vec<Participant>, DomainError> {
        let rows: Vec<ParticipantRow> = gateway::read_many(
            &self.pool,
            sqlx::query_as(
                r#"
                SELECT p.id, p.name, p.email, p.phone, p.type, p.ra, p.cpf, p.status, p.created_at
                FROM participants p
                JOIN workshop_participants wp ON wp.participant_id = p.id
                WHERE wp.workshop_id = ? AND p.type = 'student'
                ORDER BY p.name, p.id
                "#,
            )
            .bind(id.as_i64()),
            "list workshop participants",
        )
        .await?;

        rows.into_iter().map(Participant::try_from).collect()
    }

    async fn find_enrollment(
        &self,
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let row: Option<EnrollmentRow> = gateway::read_one(
            &self.pool,
            sqlx::query_as(
                r#"
                SELECT workshop_id, participant_id, created_at
                FROM workshop_participants
                WHERE workshop_id = ? AND participant_id = ?
                "#,
            )
            .bind(workshop_id.as_i64())
            .bind(participant_id.as_i64()),
            "fetch enrollment",
        )
        .await?;

        Ok(row.map(Enrollment::from))
    }

    async fn enroll(&self, enrollment: &Enrollment) -> Result<WriteAck, DomainError> {
        gateway::write(
            &self.pool,
            sqlx::query(
                "INSERT INTO workshop_participants (workshop_id, participant_id, created_at) VALUES (?, ?, ?)",
            )
            .bind(enrollment.workshop_id.as_i64())
            .bind(enrollment.participant_id.as_i64())
            .bind(enrollment.enrolled_at.as_datetime()),
            "insert enrollment",
        )
        .await
        .map_err(|err| match unique_violation(&err) {
            Some(columns) if columns.starts_with("workshop_participants.") => DomainError::new(
                ErrorCode::AlreadyEnrolled,
                "Student is already enrolled in this workshop",
            ),
            _ => err,
        })
    }

    async fn unenroll(
        &self,
        workshop_id: WorkshopId,
        participant_id: ParticipantId,
    ) -> Result<WriteAck, DomainError> {
        gateway::write(
            &self.pool,
            sqlx::query("DELETE FROM workshop_participants WHERE workshop_id = ? AND participant_id = ?")
                .bind(workshop_id.as_i64())
                .bind(participant_id.as_i64()),
            "delete enrollment",
        )
        .await
    }
}
