//! Axum router configuration for participant endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{
    create_participant, deactivate_participant, get_attendance_history, get_attendance_stats,
    get_participant, list_participants, update_participant,
};

/// Create the participant router, mounted at `/api/participants`.
pub fn participant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_participants).post(create_participant))
        .route(
            "/:id",
            get(get_participant)
                .put(update_participant)
                .delete(deactivate_participant),
        )
        .route("/:id/attendance-stats", get(get_attendance_stats))
        .route("/:id/attendance-history", get(get_attendance_history))
}
