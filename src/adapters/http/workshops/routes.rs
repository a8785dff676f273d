//! Axum router configuration for workshop endpoints.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{
    change_workshop_status, create_workshop, enroll_participant, finish_workshop,
    get_workshop, get_workshop_attendance, list_workshop_participants, list_workshops,
    unenroll_participant, update_workshop,
};

/// Create the workshop router, mounted at `/api/workshops`.
pub fn workshop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workshops).post(create_workshop))
        .route(
            "/:id",
            get(get_workshop).put(update_workshop).delete(finish_workshop),
        )
        .route("/:id/status", put(change_workshop_status))
        .route(
            "/:id/participants",
            get(list_workshop_participants).post(enroll_participant),
        )
        .route(
            "/:id/participants/:participant_id",
            delete(unenroll_participant),
        )
        .route("/:id/attendance", get(get_workshop_attendance))
}
