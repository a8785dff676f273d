//! HTTP adapter for participant endpoints.
//!
//! - `GET /api/participants` - List active participants (`?type=` filter)
//! - `POST /api/participants` - Register a participant
//! - `GET /api/participants/:id` - Get a participant
//! - `PUT /api/participants/:id` - Partially update a participant
//! - `DELETE /api/participants/:id` - Deactivate a participant
//! - `GET /api/participants/:id/attendance-stats` - Presence counts
//! - `GET /api/participants/:id/attendance-history` - Attendance history

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::participant_routes;
