//! Connection pool lifecycle for the SQLite store.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

const SCHEMA: &str = include_str!("schema.sql");

/// Handle to the open database.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool described by `config`.
    ///
    /// Foreign keys are enforced on every connection. File databases run in
    /// WAL mode and wait up to `busy_timeout` for a competing writer.
    /// In-memory databases use a single long-lived connection, since the
    /// data disappears with the last connection.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        if config.create_if_missing {
            if let Some(parent) = config.file_path().as_deref().and_then(|p| p.parent()) {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| DomainError::database("create database directory", e))?;
                }
            }
        }

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DomainError::database("parse database URL", e))?
            .create_if_missing(config.create_if_missing)
            .foreign_keys(true)
            .busy_timeout(config.busy_timeout());

        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options = options.journal_mode(SqliteJournalMode::Wal);
            SqlitePoolOptions::new()
                .min_connections(config.min_connections)
                .max_connections(config.max_connections)
                .idle_timeout(Some(config.idle_timeout()))
                .max_lifetime(Some(config.max_lifetime()))
        };

        let pool = pool_options
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await
            .map_err(|e| DomainError::database("connect to database", e))?;

        info!(url = %config.url, "Connected to database");
        Ok(Self { pool })
    }

    /// Opens a fresh private in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self, DomainError> {
        let db = Self::connect(&DatabaseConfig::in_memory()).await?;
        db.initialize_schema().await?;
        Ok(db)
    }

    /// Creates any missing table or index.
    pub async fn initialize_schema(&self) -> Result<(), DomainError> {
        self.pool
            .execute(SCHEMA)
            .await
            .map_err(|e| DomainError::database("initialize schema", e))?;
        debug!("Database schema ready");
        Ok(())
    }

    /// Round-trips a trivial query.
    pub async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("ping database", e))?;
        Ok(())
    }

    /// The underlying pool, for constructing repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Waits for checked-out connections and closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}
