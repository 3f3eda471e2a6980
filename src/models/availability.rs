//! Per-member availability record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A team member's capacity for the sprint, reconciled against assigned work.
///
/// Created by the availability calculator with `currently_assigned` at zero;
/// the assignment aggregator produces copies with the assigned total filled in.
///
/// # Example
///
/// ```
/// use sprint_capacity::models::AvailabilityRecord;
/// use rust_decimal::Decimal;
///
/// let record = AvailabilityRecord {
///     name: "alice".to_string(),
///     total_sprint_hours: Decimal::new(60, 0),
///     remaining_sprint_hours: Decimal::new(24, 0),
///     currently_assigned: Decimal::new(30, 0),
/// };
/// assert_eq!(record.headroom(), Decimal::new(-6, 0));
/// assert!(record.is_over_allocated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// The member's unique name.
    pub name: String,
    /// Capacity over every working day of the sprint.
    pub total_sprint_hours: Decimal,
    /// Capacity over the remaining working days, net of time off.
    pub remaining_sprint_hours: Decimal,
    /// Sum of remaining work on items assigned to the member.
    #[serde(default)]
    pub currently_assigned: Decimal,
}

impl AvailabilityRecord {
    /// Creates a record with nothing assigned yet.
    pub fn new(
        name: impl Into<String>,
        total_sprint_hours: Decimal,
        remaining_sprint_hours: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            total_sprint_hours,
            remaining_sprint_hours,
            currently_assigned: Decimal::ZERO,
        }
    }

    /// Remaining capacity minus assigned work. Negative when over-allocated.
    pub fn headroom(&self) -> Decimal {
        self.remaining_sprint_hours - self.currently_assigned
    }

    /// Returns true if more work is assigned than remaining capacity allows.
    pub fn is_over_allocated(&self) -> bool {
        self.headroom() < Decimal::ZERO
    }
}
