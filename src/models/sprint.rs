//! Sprint (iteration) model.
//!
//! This module contains the [`Sprint`] type describing one iteration of a
//! team, as delivered by the tracking service's iteration list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an iteration with optional inclusive boundary dates.
///
/// A sprint without both dates cannot be used for capacity purposes; sprint
/// resolution reports it as missing its dates rather than as absent.
///
/// # Example
///
/// ```
/// use sprint_capacity::models::Sprint;
/// use chrono::NaiveDate;
///
/// let sprint = Sprint {
///     id: None,
///     name: "Sprint 12".to_string(),
///     path: None,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
///     finish_date: NaiveDate::from_ymd_opt(2024, 1, 12),
/// };
/// assert!(sprint.has_dates());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    /// The tracker's identifier for the iteration, if known.
    #[serde(default)]
    pub id: Option<String>,
    /// The iteration name; the lookup key for sprint resolution.
    pub name: String,
    /// The iteration path (e.g. `Project\\Sprint 12`), if known.
    #[serde(default)]
    pub path: Option<String>,
    /// The first day of the sprint (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// The last day of the sprint (inclusive).
    #[serde(default)]
    pub finish_date: Option<NaiveDate>,
}

impl Sprint {
    /// Returns true if both boundary dates are present.
    pub fn has_dates(&self) -> bool {
        self.start_date.is_some() && self.finish_date.is_some()
    }
}
