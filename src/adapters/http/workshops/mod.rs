//! HTTP adapter for workshop endpoints.
//!
//! - `GET /api/workshops` - List workshops (`?status=` filter)
//! - `POST /api/workshops` - Create a workshop
//! - `GET /api/workshops/:id` - Get a workshop
//! - `PUT /api/workshops/:id` - Partially update a workshop
//! - `DELETE /api/workshops/:id` - Finish a workshop
//! - `PUT /api/workshops/:id/status` - Set the workshop status
//! - `GET /api/workshops/:id/participants` - Enrolled students
//! - `POST /api/workshops/:id/participants` - Enroll a student
//! - `DELETE /api/workshops/:id/participants/:participant_id` - Unenroll
//! - `GET /api/workshops/:id/attendance` - Attendance (`?date=` filter)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::workshop_routes;
