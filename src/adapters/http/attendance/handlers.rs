//! HTTP handlers for attendance endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::adapters::http::{parse_id, ApiError, AppState};
use crate::application::handlers::attendance::{
    DeleteAttendanceCommand, DeleteAttendanceHandler, GetAttendanceHandler, GetAttendanceQuery,
    ListAttendanceHandler, RecordAttendanceCommand, RecordAttendanceHandler,
    UpdateAttendanceHandler,
};
use crate::domain::attendance::AttendanceError;

use super::dto::{AttendanceEntryRequest, UpdateAttendanceRequest, BATCH_BODY_MESSAGE};

impl AppState {
    pub fn record_attendance_handler(&self) -> RecordAttendanceHandler {
        RecordAttendanceHandler::new(self.attendance.clone())
    }

    pub fn update_attendance_handler(&self) -> UpdateAttendanceHandler {
        UpdateAttendanceHandler::new(self.attendance.clone())
    }

    pub fn delete_attendance_handler(&self) -> DeleteAttendanceHandler {
        DeleteAttendanceHandler::new(self.attendance.clone())
    }

    pub fn get_attendance_handler(&self) -> GetAttendanceHandler {
        GetAttendanceHandler::new(self.attendance.clone())
    }

    pub fn list_attendance_handler(&self) -> ListAttendanceHandler {
        ListAttendanceHandler::new(self.attendance.clone())
    }
}

/// GET /api/attendance
pub async fn list_attendance(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let records = state.list_attendance_handler().handle().await?;
    Ok(Json(records))
}

/// GET /api/attendance/:id
pub async fn get_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetAttendanceQuery { id: parse_id(&id)? };
    let record = state.get_attendance_handler().handle(query).await?;
    Ok(Json(record))
}

/// POST /api/attendance - Replace one workshop's attendance on one date
///
/// Responds with one `{id, changes}` acknowledgment per entry, in the
/// submitted order. A body that is not a JSON array gets the generic batch
/// message; an array whose elements fail to decode reports the decode error.
pub async fn record_attendance(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let not_a_batch = || AttendanceError::validation("records", BATCH_BODY_MESSAGE);
    let Json(body) = body.map_err(|_| not_a_batch())?;
    if !body.is_array() {
        return Err(not_a_batch().into());
    }
    let requests: Vec<AttendanceEntryRequest> = serde_json::from_value(body)
        .map_err(|err| AttendanceError::validation("records", err.to_string()))?;

    let entries = requests
        .into_iter()
        .map(AttendanceEntryRequest::into_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let acks = state
        .record_attendance_handler()
        .handle(RecordAttendanceCommand { entries })
        .await?;
    Ok((StatusCode::CREATED, Json(acks)))
}

/// PUT /api/attendance/:id
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateAttendanceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = body?;
    let record = state
        .update_attendance_handler()
        .handle(request.into_command(id)?)
        .await?;
    Ok(Json(record))
}

/// DELETE /api/attendance/:id
pub async fn delete_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteAttendanceCommand { id: parse_id(&id)? };
    state.delete_attendance_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}
