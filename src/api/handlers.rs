//! HTTP request handlers for the Attendance Performance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{DerivedAttendanceRow, MonthlyAggregate};
use crate::pipeline::run_pipeline;

use super::request::ReportRequest;
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Response body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Per-day derived rows, one per submitted attendance record.
    pub rows: Vec<DerivedAttendanceRow>,
    /// Monthly aggregates with tier-classified fine/bonus rates.
    pub monthly: Vec<MonthlyAggregate>,
}

/// Handler for POST /report endpoint.
///
/// Accepts one snapshot of attendance, holiday, and permission records and
/// returns the derived daily rows plus the monthly aggregates.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Relies on serde's "missing field `...`" message text;
                    // axum exposes no structured cause for data errors.
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // The pipeline absorbs per-record failures, so a parsed request always
    // produces a report.
    let start_time = Instant::now();
    let report = run_pipeline(
        &request.attendance,
        &request.holidays,
        &request.permissions,
        state.policy(),
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        attendance_count = request.attendance.len(),
        holiday_count = request.holidays.len(),
        permission_count = request.permissions.len(),
        monthly_rows = report.monthly.len(),
        duration_us = duration.as_micros(),
        "Report completed successfully"
    );

    let response = ReportResponse {
        rows: report.rows,
        monthly: report.monthly,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
