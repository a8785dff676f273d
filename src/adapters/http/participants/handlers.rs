//! HTTP handlers for participant endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::participant::{
    DeactivateParticipantCommand, DeactivateParticipantHandler, GetAttendanceHistoryHandler,
    GetAttendanceHistoryQuery, GetAttendanceStatsHandler, GetAttendanceStatsQuery,
    GetParticipantHandler, GetParticipantQuery, ListParticipantsHandler, ListParticipantsQuery,
    RegisterParticipantHandler, UpdateParticipantHandler,
};
use crate::adapters::http::{parse_id, ApiError, AppState};

use super::dto::{CreateParticipantRequest, ListParticipantsParams, UpdateParticipantRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Handler Factories
// ════════════════════════════════════════════════════════════════════════════════

impl AppState {
    pub fn register_participant_handler(&self) -> RegisterParticipantHandler {
        RegisterParticipantHandler::new(self.participants.clone())
    }

    pub fn update_participant_handler(&self) -> UpdateParticipantHandler {
        UpdateParticipantHandler::new(self.participants.clone())
    }

    pub fn deactivate_participant_handler(&self) -> DeactivateParticipantHandler {
        DeactivateParticipantHandler::new(self.participants.clone(), self.workshops.clone())
    }

    pub fn get_participant_handler(&self) -> GetParticipantHandler {
        GetParticipantHandler::new(self.participants.clone())
    }

    pub fn list_participants_handler(&self) -> ListParticipantsHandler {
        ListParticipantsHandler::new(self.participants.clone())
    }

    pub fn attendance_stats_handler(&self) -> GetAttendanceStatsHandler {
        GetAttendanceStatsHandler::new(self.attendance_reader.clone())
    }

    pub fn attendance_history_handler(&self) -> GetAttendanceHistoryHandler {
        GetAttendanceHistoryHandler::new(self.attendance_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/participants - List active participants
pub async fn list_participants(
    State(state): State<AppState>,
    Query(params): Query<ListParticipantsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListParticipantsQuery {
        participant_type: params.participant_type,
    };
    let participants = state.list_participants_handler().handle(query).await?;
    Ok(Json(participants))
}

/// GET /api/participants/:id - Get one participant
pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetParticipantQuery { id: parse_id(&id)? };
    let participant = state.get_participant_handler().handle(query).await?;
    Ok(Json(participant))
}

/// GET /api/participants/:id/attendance-stats - Presence counts
pub async fn get_attendance_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetAttendanceStatsQuery {
        participant_id: parse_id(&id)?,
    };
    let stats = state.attendance_stats_handler().handle(query).await?;
    Ok(Json(stats))
}

/// GET /api/participants/:id/attendance-history - Newest records first
pub async fn get_attendance_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetAttendanceHistoryQuery {
        participant_id: parse_id(&id)?,
    };
    let history = state.attendance_history_handler().handle(query).await?;
    Ok(Json(history))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/participants - Register a participant
pub async fn create_participant(
    State(state): State<AppState>,
    body: Result<Json<CreateParticipantRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let participant = state
        .register_participant_handler()
        .handle(request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(participant)))
}

/// PUT /api/participants/:id - Partial update
pub async fn update_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateParticipantRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body?;
    let participant = state
        .update_participant_handler()
        .handle(request.into_command(id))
        .await?;
    Ok(Json(participant))
}

/// DELETE /api/participants/:id - Deactivate (soft delete)
pub async fn deactivate_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeactivateParticipantCommand { id: parse_id(&id)? };
    state.deactivate_participant_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
