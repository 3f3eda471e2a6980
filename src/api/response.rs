//! Response types for the Sprint Capacity Engine API.
//!
//! This module defines the snapshot response, the error response structures,
//! and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::CapacityError;
use crate::models::{Snapshot, SnapshotRow};

/// Successful response of the `/snapshot` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotResponse {
    /// The version of the engine that computed the snapshot.
    pub engine_version: String,
    /// The computed snapshot.
    pub snapshot: Snapshot,
    /// The snapshot flattened to one row per member.
    pub rows: Vec<SnapshotRow>,
}

impl SnapshotResponse {
    /// Wraps a snapshot, deriving its rows.
    pub fn new(snapshot: Snapshot) -> Self {
        let rows = snapshot.rows();
        Self {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            snapshot,
            rows,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CapacityError> for ApiErrorResponse {
    fn from(error: CapacityError) -> Self {
        let message = error.to_string();
        match error {
            CapacityError::SprintNotFound { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "SPRINT_NOT_FOUND",
                    message,
                    format!("No iteration named '{}' exists for this team", name),
                ),
            },
            CapacityError::MissingSprintDates { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "MISSING_SPRINT_DATES",
                    message,
                    "The iteration must have both a start date and a finish date",
                ),
            },
            CapacityError::MalformedRecord { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_RECORD",
                    message,
                    "Timestamps must use the format YYYY-MM-DDTHH:MM:SSZ",
                ),
            },
            CapacityError::ConfigNotFound { .. }
            | CapacityError::ConfigParseError { .. }
            | CapacityError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
