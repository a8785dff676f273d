//! SQLite adapters - Database implementations for repository ports.
//!
//! This module provides adapters for SQLite-backed persistence:
//! - `Database` - Pool lifecycle and schema initialization
//! - `SqliteParticipantRepository` - Participants and soft deletion
//! - `SqliteWorkshopRepository` - Workshops and enrollments
//! - `SqliteAttendanceRepository` - Attendance writes and the batch transaction
//! - `SqliteAttendanceReader` - Joined attendance views and statistics

mod attendance_reader;
mod attendance_repository;
mod database;
pub mod gateway;
mod participant_repository;
mod workshop_repository;

pub use attendance_reader::SqliteAttendanceReader;
pub use attendance_repository::SqliteAttendanceRepository;
pub use database::Database;
pub use participant_repository::SqliteParticipantRepository;
pub use workshop_repository::SqliteWorkshopRepository;

use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Parses an enum stored as text, treating garbage as a storage fault.
fn parse_column<T>(column: &str, value: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = ValidationError>,
{
    value.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {} value: {}", column, value),
        )
    })
}
