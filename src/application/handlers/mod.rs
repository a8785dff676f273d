//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Every
//! validation, uniqueness and referential check runs before the first
//! mutating call on a port.

pub mod attendance;
pub mod participant;
pub mod workshop;

#[cfg(test)]
pub(crate) mod mocks;
