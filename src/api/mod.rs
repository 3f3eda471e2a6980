//! HTTP API module for the Sprint Capacity Engine.
//!
//! This module provides the REST API endpoint that computes a team's sprint
//! capacity snapshot from payloads already fetched from the tracking service.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SnapshotRequest;
pub use response::{ApiError, ApiErrorResponse, SnapshotResponse};
pub use state::AppState;
