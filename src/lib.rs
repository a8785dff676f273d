//! Workshop Attendance - workshops, enrollments and attendance tracking.
//!
//! Participants (students and instructors) enroll in workshops, and the
//! attendance of each workshop is recorded one day at a time. A day's
//! submission always replaces what was recorded before for that workshop
//! and date, atomically.
//!
//! The crate is laid out hexagonally: `domain` holds the rules, `ports` the
//! storage contracts, `application` the command and query handlers, and
//! `adapters` the SQLite store, the axum REST API and a reqwest client.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
