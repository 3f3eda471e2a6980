//! Assignment aggregation.
//!
//! Sums remaining work per assignee and attaches the totals to the team's
//! availability records. The aggregation only reports against the known
//! roster: work assigned to anyone without a record is dropped.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AvailabilityRecord, WorkItem};

/// Returns copies of `records` with `currently_assigned` recomputed from `work_items`.
///
/// Every record starts again from zero, so applying the same work items twice
/// gives the same result as applying them once. Assignees are matched to
/// record names exactly. Items without an assignee or without a remaining-work
/// estimate are skipped.
///
/// # Example
///
/// ```
/// use sprint_capacity::calculation::apply_assignments;
/// use sprint_capacity::models::{AvailabilityRecord, WorkItem};
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     AvailabilityRecord::new("alice", Decimal::new(60, 0), Decimal::new(30, 0)),
///     AvailabilityRecord::new("bob", Decimal::new(60, 0), Decimal::new(30, 0)),
/// ];
/// let item = |id: u64, hours: i64| WorkItem {
///     id,
///     assigned_to: Some("alice".to_string()),
///     remaining_work: Some(Decimal::new(hours, 0)),
///     state: None,
/// };
///
/// let updated = apply_assignments(&records, &[item(1, 3), item(2, 5)]);
/// assert_eq!(updated[0].currently_assigned, Decimal::new(8, 0));
/// assert_eq!(updated[1].currently_assigned, Decimal::ZERO);
/// ```
pub fn apply_assignments(
    records: &[AvailabilityRecord],
    work_items: &[WorkItem],
) -> Vec<AvailabilityRecord> {
    let totals = assigned_hours_by_assignee(work_items);

    let unmatched = totals
        .keys()
        .filter(|name| !records.iter().any(|r| r.name == **name))
        .count();
    if unmatched > 0 {
        debug!(
            unmatched_assignees = unmatched,
            "Ignoring work assigned outside the team roster"
        );
    }

    records
        .iter()
        .map(|record| AvailabilityRecord {
            currently_assigned: totals
                .get(record.name.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO),
            ..record.clone()
        })
        .collect()
}

/// Sums remaining work per assignee over the contributing work items.
pub fn assigned_hours_by_assignee(work_items: &[WorkItem]) -> HashMap<&str, Decimal> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for (assignee, hours) in work_items.iter().filter_map(WorkItem::assignment) {
        *totals.entry(assignee).or_insert(Decimal::ZERO) += hours;
    }
    totals
}
