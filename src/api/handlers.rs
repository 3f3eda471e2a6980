//! HTTP request handlers for the Sprint Capacity Engine API.
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
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_snapshot;
use crate::config::ConfigLoader;
use crate::error::CapacityResult;
use crate::models::Snapshot;

use super::request::SnapshotRequest;
use super::response::{ApiError, ApiErrorResponse, SnapshotResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/snapshot", post(snapshot_handler))
        .with_state(state)
}

/// Handler for POST /snapshot endpoint.
///
/// Accepts the fetched iteration, capacity and work item payloads and returns
/// the team's capacity snapshot.
async fn snapshot_handler(
    State(state): State<AppState>,
    payload: Result<Json<SnapshotRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing snapshot request");

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
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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

    // Captured once so every date comparison in this computation agrees
    let now = request.as_of.unwrap_or_else(|| Utc::now().naive_utc());

    let start_time = Instant::now();
    match perform_snapshot(&request, state.config(), now) {
        Ok(snapshot) => {
            info!(
                correlation_id = %correlation_id,
                team = %request.team,
                sprint = %request.sprint,
                members = snapshot.members.len(),
                remaining_hours = %snapshot.team_remaining_hours(),
                assigned_hours = %snapshot.team_assigned_hours(),
                duration_us = start_time.elapsed().as_micros(),
                "Snapshot computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(SnapshotResponse::new(snapshot)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                team = %request.team,
                sprint = %request.sprint,
                resolution_failure = err.is_resolution_failure(),
                error = %err,
                "Snapshot computation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Converts the request payloads and builds the snapshot.
fn perform_snapshot(
    request: &SnapshotRequest,
    config: &ConfigLoader,
    now: chrono::NaiveDateTime,
) -> CapacityResult<Snapshot> {
    let input = request.to_input(config.fields())?;
    build_snapshot(request.context(), &input, config.policy(), now)
}
