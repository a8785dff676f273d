//! Workshop domain module.
//!
//! A workshop is a recurring course led by one instructor. Workshops are
//! never removed; "deleting" one finishes it. Students join a workshop
//! through an enrollment.

mod aggregate;
mod enrollment;
mod errors;
mod status;

pub use aggregate::{NewWorkshop, Workshop, WorkshopChanges, WorkshopRef};
pub use enrollment::Enrollment;
pub use errors::WorkshopError;
pub use status::WorkshopStatus;
