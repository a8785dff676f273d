//! HTTP handlers for workshop and enrollment endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::{parse_id, ApiError, AppState};
use crate::application::handlers::workshop::{
    ChangeWorkshopStatusCommand, ChangeWorkshopStatusHandler, CreateWorkshopHandler,
    EnrollParticipantCommand, EnrollParticipantHandler, GetWorkshopAttendanceHandler,
    GetWorkshopAttendanceQuery, GetWorkshopHandler, GetWorkshopQuery,
    ListWorkshopParticipantsHandler, ListWorkshopParticipantsQuery, ListWorkshopsHandler,
    ListWorkshopsQuery, UnenrollParticipantCommand, UnenrollParticipantHandler,
    UpdateWorkshopHandler,
};

use super::dto::{
    ChangeStatusRequest, CreateWorkshopRequest, EnrollRequest, ListWorkshopsParams,
    MessageResponse, UpdateWorkshopRequest, WorkshopAttendanceParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Handler Factories
// ════════════════════════════════════════════════════════════════════════════════

impl AppState {
    pub fn create_workshop_handler(&self) -> CreateWorkshopHandler {
        CreateWorkshopHandler::new(self.workshops.clone(), self.participants.clone())
    }

    pub fn update_workshop_handler(&self) -> UpdateWorkshopHandler {
        UpdateWorkshopHandler::new(self.workshops.clone(), self.participants.clone())
    }

    pub fn change_workshop_status_handler(&self) -> ChangeWorkshopStatusHandler {
        ChangeWorkshopStatusHandler::new(self.workshops.clone())
    }

    pub fn enroll_participant_handler(&self) -> EnrollParticipantHandler {
        EnrollParticipantHandler::new(self.workshops.clone(), self.participants.clone())
    }

    pub fn unenroll_participant_handler(&self) -> UnenrollParticipantHandler {
        UnenrollParticipantHandler::new(self.workshops.clone())
    }

    pub fn get_workshop_handler(&self) -> GetWorkshopHandler {
        GetWorkshopHandler::new(self.workshops.clone())
    }

    pub fn list_workshops_handler(&self) -> ListWorkshopsHandler {
        ListWorkshopsHandler::new(self.workshops.clone())
    }

    pub fn list_workshop_participants_handler(&self) -> ListWorkshopParticipantsHandler {
        ListWorkshopParticipantsHandler::new(self.workshops.clone())
    }

    pub fn workshop_attendance_handler(&self) -> GetWorkshopAttendanceHandler {
        GetWorkshopAttendanceHandler::new(self.workshops.clone(), self.attendance_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/workshops - List workshops with instructor names
pub async fn list_workshops(
    State(state): State<AppState>,
    Query(params): Query<ListWorkshopsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListWorkshopsQuery {
        status: params.status,
    };
    let workshops = state.list_workshops_handler().handle(query).await?;
    Ok(Json(workshops))
}

/// GET /api/workshops/:id
pub async fn get_workshop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetWorkshopQuery { id: parse_id(&id)? };
    let workshop = state.get_workshop_handler().handle(query).await?;
    Ok(Json(workshop))
}

/// GET /api/workshops/:id/participants - Enrolled students
pub async fn list_workshop_participants(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListWorkshopParticipantsQuery {
        workshop_id: parse_id(&id)?,
    };
    let participants = state
        .list_workshop_participants_handler()
        .handle(query)
        .await?;
    Ok(Json(participants))
}

/// GET /api/workshops/:id/attendance - Attendance with participant contacts
pub async fn get_workshop_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<WorkshopAttendanceParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetWorkshopAttendanceQuery {
        workshop_id: parse_id(&id)?,
        date: params.date,
    };
    let attendance = state.workshop_attendance_handler().handle(query).await?;
    Ok(Json(attendance))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/workshops
pub async fn create_workshop(
    State(state): State<AppState>,
    body: Result<Json<CreateWorkshopRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let workshop = state.create_workshop_handler().handle(request.into()).await?;
    Ok((StatusCode::CREATED, Json(workshop)))
}

/// PUT /api/workshops/:id - Partial update
pub async fn update_workshop(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateWorkshopRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body?;
    let workshop = state
        .update_workshop_handler()
        .handle(request.into_command(id))
        .await?;
    Ok(Json(workshop))
}

/// PUT /api/workshops/:id/status
pub async fn change_workshop_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ChangeStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body?;
    let cmd = ChangeWorkshopStatusCommand {
        id,
        status: request.status,
    };
    let workshop = state.change_workshop_status_handler().handle(cmd).await?;
    Ok(Json(workshop))
}

/// DELETE /api/workshops/:id - Workshops are finished, never removed
pub async fn finish_workshop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = ChangeWorkshopStatusCommand::finish(parse_id(&id)?);
    state.change_workshop_status_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/workshops/:id/participants - Enroll an active student
pub async fn enroll_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EnrollRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let workshop_id = parse_id(&id)?;
    let Json(request) = body?;
    let cmd = EnrollParticipantCommand {
        workshop_id,
        participant_id: request.participant_id,
    };
    state.enroll_participant_handler().handle(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Student added successfully")),
    ))
}

/// DELETE /api/workshops/:id/participants/:participant_id
pub async fn unenroll_participant(
    State(state): State<AppState>,
    Path((id, participant_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UnenrollParticipantCommand {
        workshop_id: parse_id(&id)?,
        participant_id: parse_id(&participant_id)?,
    };
    state.unenroll_participant_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
