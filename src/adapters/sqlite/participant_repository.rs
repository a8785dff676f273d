//! SQLite implementation of ParticipantRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, Timestamp};
use crate::domain::participant::{NewParticipant, Participant, ParticipantStatus, ParticipantType};
use crate::ports::{ParticipantRepository, WriteAck};

use super::gateway::{self, unique_violation};
use super::parse_column;

pub(super) const PARTICIPANT_COLUMNS: &str =
    "id, name, email, phone, type, ra, cpf, status, created_at";

/// SQLite implementation of the ParticipantRepository port.
pub struct SqliteParticipantRepository {
    pool: SqlitePool,
}

impl SqliteParticipantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a participant.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ParticipantRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    #[sqlx(rename = "type")]
    participant_type: String,
    ra: Option<String>,
    cpf: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = DomainError;

    fn try_from(row: ParticipantRow) -> Result<Self, Self::Error> {
        Ok(Participant {
            id: ParticipantId::new(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            participant_type: parse_column("type", &row.participant_type)?,
            ra: row.ra,
            cpf: row.cpf,
            status: parse_column("status", &row.status)?,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

/// Turns a UNIQUE violation on participants into the matching conflict.
fn conflict(err: DomainError) -> DomainError {
    match unique_violation(&err) {
        Some("participants.cpf") => DomainError::new(ErrorCode::DuplicateCpf, "CPF already registered"),
        Some("participants.email") => {
            DomainError::new(ErrorCode::DuplicateEmail, "Email already registered")
        }
        _ => err,
    }
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepository {
    async fn create(&self, participant: &NewParticipant) -> Result<Participant, DomainError> {
        let created_at = Timestamp::now();
        let status = ParticipantStatus::Active;

        let ack = gateway::write(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO participants (name, email, phone, type, ra, cpf, status, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&participant.name)
            .bind(&participant.email)
            .bind(&participant.phone)
            .bind(participant.participant_type.as_str())
            .bind(&participant.ra)
            .bind(&participant.cpf)
            .bind(status.as_str())
            .bind(created_at.as_datetime()),
            "insert participant",
        )
        .await
        .map_err(conflict)?;

        Ok(Participant {
            id: ParticipantId::new(ack.id),
            name: participant.name.clone(),
            email: participant.email.clone(),
            phone: participant.phone.clone(),
            participant_type: participant.participant_type,
            ra: participant.ra.clone(),
            cpf: participant.cpf.clone(),
            status,
            created_at,
        })
    }

    async fn find_by_id(&self, id: ParticipantId) -> Result<Option<Participant>, DomainError> {
        let sql = format!("SELECT {} FROM participants WHERE id = ?", PARTICIPANT_COLUMNS);
        let row: Option<ParticipantRow> = gateway::read_one(
            &self.pool,
            sqlx::query_as(&sql).bind(id.as_i64()),
            "fetch participant",
        )
        .await?;

        row.map(Participant::try_from).transpose()
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<ParticipantId>, DomainError> {
        let row: Option<(i64,)> = gateway::read_one(
            &self.pool,
            sqlx::query_as("SELECT id FROM participants WHERE cpf = ?").bind(cpf),
            "look up participant by cpf",
        )
        .await?;

        Ok(row.map(|(id,)| ParticipantId::new(id)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<ParticipantId>, DomainError> {
        let row: Option<(i64,)> = gateway::read_one(
            &self.pool,
            sqlx::query_as("SELECT id FROM participants WHERE email = ?").bind(email),
            "look up participant by email",
        )
        .await?;

        Ok(row.map(|(id,)| ParticipantId::new(id)))
    }

    async fn list_active(
        &self,
        participant_type: Option<ParticipantType>,
    ) -> Result<Vec<Participant>, DomainError> {
        let sql = format!(
            "SELECT {} FROM participants WHERE status = 'active' AND (?1 IS NULL OR type = ?1) ORDER BY id",
            PARTICIPANT_COLUMNS
        );
        let rows: Vec<ParticipantRow> = gateway::read_many(
            &self.pool,
            sqlx::query_as(&sql).bind(participant_type.map(|t| t.as_str())),
            "list participants",
        )
        .await?;

        rows.into_iter().map(Participant::try_from).collect()
    }

    async fn update(&self, participant: &Participant) -> Result<WriteAck, DomainError> {
        gateway::write(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE participants
                SET name = ?, email = ?, phone = ?, type = ?, ra = ?
                WHERE id = ?
                "#,
            )
            .bind(&participant.name)
            .bind(&participant.email)
            .bind(&participant.phone)
            .bind(participant.participant_type.as_str())
            .bind(&participant.ra)
            .bind(participant.id.as_i64()),
            "update participant",
        )
        .await
        .map_err(conflict)
    }

    async fn set_status(
        &self,
        id: ParticipantId,
        status: ParticipantStatus,
    ) -> Result<WriteAck, DomainError> {
        gateway::write(
            &self.pool,
            sqlx::query("UPDATE participants SET status = ? WHERE id = ?")
                .bind(status.as_str())
                .bind(id.as_i64()),
            "update participant status",
        )
        .await
    }
}
