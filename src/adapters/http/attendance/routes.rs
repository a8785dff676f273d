//! Axum router configuration for attendance endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{
    delete_attendance, get_attendance, list_attendance, record_attendance, update_attendance,
};

/// Create the attendance router, mounted at `/api/attendance`.
pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attendance).post(record_attendance))
        .route(
            "/:id",
            get(get_attendance)
                .put(update_attendance)
                .delete(delete_attendance),
        )
}
