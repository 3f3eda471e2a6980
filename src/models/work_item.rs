//! Work item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A work item in the sprint, reduced to the fields capacity reconciliation needs.
///
/// Items may be unassigned or lack a remaining-work estimate; such items do
/// not contribute to assignment totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// The tracker's identifier for the item.
    pub id: u64,
    /// Unique name of the assignee, if any.
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Remaining work in hours, if estimated.
    #[serde(default)]
    pub remaining_work: Option<Decimal>,
    /// Workflow state (e.g. "Active"), if known.
    #[serde(default)]
    pub state: Option<String>,
}

impl WorkItem {
    /// Returns the assignee and hours if this item counts towards assignments.
    ///
    /// # Example
    ///
    /// ```
    /// use sprint_capacity::models::WorkItem;
    /// use rust_decimal::Decimal;
    ///
    /// let item = WorkItem {
    ///     id: 42,
    ///     assigned_to: Some("alice".to_string()),
    ///     remaining_work: Some(Decimal::new(3, 0)),
    ///     state: None,
    /// };
    /// assert_eq!(item.assignment(), Some(("alice", Decimal::new(3, 0))));
    ///
    /// let unassigned = WorkItem { assigned_to: None, ..item };
    /// assert_eq!(unassigned.assignment(), None);
    /// ```
    pub fn assignment(&self) -> Option<(&str, Decimal)> {
        match (&self.assigned_to, self.remaining_work) {
            (Some(name), Some(hours)) => Some((name.as_str(), hours)),
            _ => None,
        }
    }
}
