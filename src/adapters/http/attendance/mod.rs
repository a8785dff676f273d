//! HTTP adapter for attendance endpoints.
//!
//! - `GET /api/attendance` - List every record
//! - `POST /api/attendance` - Record a batch for one workshop and date
//! - `GET /api/attendance/:id` - Get one record
//! - `PUT /api/attendance/:id` - Correct one record
//! - `DELETE /api/attendance/:id` - Delete one record

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::attendance_routes;
