//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ParticipantRepository` - Participant registration, updates and soft deletion
//! - `WorkshopRepository` - Workshops and student enrollments
//! - `AttendanceRepository` - Attendance writes, including the batch transaction
//! - `AttendanceReader` - Joined attendance views and statistics

mod attendance_reader;
mod attendance_repository;
mod participant_repository;
mod workshop_repository;
mod write_ack;

pub use attendance_reader::{AttendanceHistoryEntry, AttendanceReader, WorkshopAttendanceView};
pub use attendance_repository::AttendanceRepository;
pub use participant_repository::ParticipantRepository;
pub use workshop_repository::WorkshopRepository;
pub use write_ack::WriteAck;
