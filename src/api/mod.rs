//! HTTP API module for the Attendance Performance Engine.
//!
//! This module provides the REST endpoint for running the attendance
//! pipeline over a submitted record snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ReportResponse, create_router};
pub use request::ReportRequest;
pub use response::ApiError;
pub use state::AppState;
