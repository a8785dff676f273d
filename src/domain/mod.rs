//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `participant` - Students and instructors, registration and soft deletion
//! - `workshop` - Workshops, their lifecycle and student enrollment
//! - `attendance` - Attendance records, batch submissions and statistics

pub mod attendance;
pub mod foundation;
pub mod participant;
pub mod workshop;
