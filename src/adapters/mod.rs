//! Adapters - Implementations of port interfaces.
//!
//! - `sqlite` - SQLite persistence behind the repository and reader ports
//! - `http` - axum REST API over the application handlers
//! - `client` - reqwest client for that API

pub mod client;
pub mod http;
pub mod sqlite;

pub use client::{ApiClient, ClientError};
pub use http::{api_router, AppState};
