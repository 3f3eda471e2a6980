//! Error types for the Sprint Capacity Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reconciling sprint capacity.

use thiserror::Error;

/// The main error type for the Sprint Capacity Engine.
///
/// Sprint resolution failures are kept as distinct variants so callers can
/// react differently to them (skip a team versus abort a batch).
///
/// # Example
///
/// ```
/// use sprint_capacity::error::CapacityError;
///
/// let error = CapacityError::SprintNotFound {
///     name: "Sprint 5".to_string(),
/// };
/// assert_eq!(error.to_string(), "Sprint not found: Sprint 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// No iteration matches the requested sprint name.
    #[error("Sprint not found: {name}")]
    SprintNotFound {
        /// The sprint name that was requested.
        name: String,
    },

    /// The iteration was found but its start or finish date is absent.
    #[error("Start date or finish date is missing for sprint '{name}'")]
    MissingSprintDates {
        /// The name of the iteration as it appears in the source data.
        name: String,
    },

    /// An input record contained a value that could not be interpreted.
    #[error("Malformed record '{record}': field '{field}' has value '{value}': {message}")]
    MalformedRecord {
        /// Identifies the offending record (e.g. a member's unique name).
        record: String,
        /// The field that could not be parsed.
        field: String,
        /// The raw value as received.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The working-day policy could not be built from its configuration.
    #[error("Invalid working-day policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },
}

impl CapacityError {
    /// Returns true for the errors raised while resolving the sprint.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            CapacityError::SprintNotFound { .. } | CapacityError::MissingSprintDates { .. }
        )
    }
}

/// A type alias for Results that return CapacityError.
pub type CapacityResult<T> = Result<T, CapacityError>;
