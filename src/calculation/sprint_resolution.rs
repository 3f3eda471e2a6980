//! Sprint resolution.
//!
//! Finds the requested sprint in an iteration list and checks that it has
//! both boundary dates. Names are compared after trimming surrounding
//! whitespace and ignoring case; the same rule is used everywhere a sprint is
//! looked up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CapacityError, CapacityResult};
use crate::models::{Sprint, WorkingDayPolicy};

use super::working_days::count_working_days;

/// A sprint known to have both boundary dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSprint {
    /// The tracker's identifier for the iteration, if known.
    pub id: Option<String>,
    /// The iteration name as it appears in the source data.
    pub name: String,
    /// The first day of the sprint (inclusive).
    pub start: NaiveDate,
    /// The last day of the sprint (inclusive).
    pub finish: NaiveDate,
}

impl ResolvedSprint {
    /// Counts every working day of the sprint under `policy`.
    pub fn working_days(&self, policy: &WorkingDayPolicy) -> u32 {
        count_working_days(self.start, self.finish, policy, None)
    }

    /// Counts the working days from `today` (inclusive) to the end of the sprint.
    pub fn remaining_working_days(&self, policy: &WorkingDayPolicy, today: NaiveDate) -> u32 {
        count_working_days(self.start, self.finish, policy, Some(today))
    }
}

/// Returns true if an iteration name matches the requested sprint name.
pub fn sprint_name_matches(candidate: &str, requested: &str) -> bool {
    candidate.trim().to_lowercase() == requested.trim().to_lowercase()
}

/// Finds a sprint by name and ensures it carries both dates.
///
/// The first iteration whose name matches wins.
///
/// # Errors
///
/// * [`CapacityError::SprintNotFound`] if no iteration matches
/// * [`CapacityError::MissingSprintDates`] if the match lacks a start or finish date
///
/// # Example
///
/// ```
/// use sprint_capacity::calculation::find_sprint;
/// use sprint_capacity::error::CapacityError;
/// use sprint_capacity::models::Sprint;
/// use chrono::NaiveDate;
///
/// let sprints = vec![Sprint {
///     id: None,
///     name: "Sprint 4".to_string(),
///     path: None,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
///     finish_date: NaiveDate::from_ymd_opt(2024, 1, 12),
/// }];
///
/// let sprint = find_sprint(&sprints, " sprint 4 ")?;
/// assert_eq!(sprint.name, "Sprint 4");
///
/// let missing = find_sprint(&sprints, "Sprint 5");
/// assert!(matches!(missing, Err(CapacityError::SprintNotFound { .. })));
/// # Ok::<(), CapacityError>(())
/// ```
pub fn find_sprint(sprints: &[Sprint], name: &str) -> CapacityResult<ResolvedSprint> {
    let sprint = sprints
        .iter()
        .find(|s| sprint_name_matches(&s.name, name))
        .ok_or_else(|| CapacityError::SprintNotFound {
            name: name.to_string(),
        })?;

    match (sprint.start_date, sprint.finish_date) {
        (Some(start), Some(finish)) => Ok(ResolvedSprint {
            id: sprint.id.clone(),
            name: sprint.name.clone(),
            start,
            finish,
        }),
        _ => Err(CapacityError::MissingSprintDates {
            name: sprint.name.clone(),
        }),
    }
}
