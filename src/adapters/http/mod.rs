//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with DTOs, handlers and routes. All of
//! them share one [`AppState`] and are mounted under `/api` by
//! [`api_router`]; `/health` sits outside the API prefix.

pub mod attendance;
mod error;
pub mod middleware;
pub mod participants;
pub mod workshops;

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::adapters::sqlite::{
    Database, SqliteAttendanceReader, SqliteAttendanceRepository, SqliteParticipantRepository,
    SqliteWorkshopRepository,
};
use crate::domain::foundation::ValidationError;
use crate::ports::{AttendanceReader, AttendanceRepository, ParticipantRepository, WorkshopRepository};

pub use error::{ApiError, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub participants: Arc<dyn ParticipantRepository>,
    pub workshops: Arc<dyn WorkshopRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub attendance_reader: Arc<dyn AttendanceReader>,
    pub database: Database,
}

impl AppState {
    /// Wires the SQLite adapters around one connection pool.
    pub fn sqlite(database: Database) -> Self {
        let pool = database.pool().clone();
        Self {
            participants: Arc::new(SqliteParticipantRepository::new(pool.clone())),
            workshops: Arc::new(SqliteWorkshopRepository::new(pool.clone())),
            attendance: Arc::new(SqliteAttendanceRepository::new(pool.clone())),
            attendance_reader: Arc::new(SqliteAttendanceReader::new(pool)),
            database,
        }
    }
}

/// Builds the full application router.
///
/// # Routes
/// - `/api/participants/...`
/// - `/api/workshops/...`
/// - `/api/attendance/...`
/// - `GET /health`
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/participants", participants::participant_routes())
        .nest("/workshops", workshops::workshop_routes())
        .nest("/attendance", attendance::attendance_routes());

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .with_state(state)
}

// ════════════════════════════════════════════════════════════════════════════════
// Health
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// GET /health - Liveness plus a database round trip.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                database: "ok".to_string(),
            }),
        ),
        Err(err) => {
            warn!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    database: err.message,
                }),
            )
        }
    }
}

/// Parses a path segment into a typed id, rejecting it with a 400.
pub(crate) fn parse_id<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = ValidationError>,
{
    raw.parse().map_err(ApiError::from)
}
