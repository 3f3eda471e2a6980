//! Team member capacity model.
//!
//! This module defines [`TeamMember`] and the [`DaysOff`] interval used to
//! describe a member's personal time off within a sprint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A closed interval of days off, inclusive of both ends.
///
/// Degenerate intervals (`start == end`) describe a single day. Intervals
/// with `start > end` contain no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysOff {
    /// The first day off (inclusive).
    pub start: NaiveDate,
    /// The last day off (inclusive).
    pub end: NaiveDate,
}

/// A team member's capacity for one sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// The member's unique name; matched exactly against work item assignees.
    pub unique_name: String,
    /// The member's display name, if known.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Hours of work available per working day.
    #[serde(default)]
    pub capacity_per_day: Decimal,
    /// Personal time off intervals. Overlaps are not merged.
    #[serde(default)]
    pub days_off: Vec<DaysOff>,
}
