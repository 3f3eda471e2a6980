//! Snapshot building.
//!
//! Runs the full reconciliation pipeline (sprint resolution, working-day
//! counting, member availability, assignment aggregation) for one team and
//! wraps the result in a [`Snapshot`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::CapacityResult;
use crate::models::{Snapshot, SnapshotContext, Sprint, TeamMember, WorkItem, WorkingDayPolicy};

use super::assignments::apply_assignments;
use super::availability::compute_member_availability;
use super::sprint_resolution::find_sprint;

/// The materialized inputs of one snapshot computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotInput {
    /// The team's iterations.
    #[serde(default)]
    pub sprints: Vec<Sprint>,
    /// The team's capacity records for the sprint.
    #[serde(default)]
    pub members: Vec<TeamMember>,
    /// The sprint's work items.
    #[serde(default)]
    pub work_items: Vec<WorkItem>,
}

/// Builds the capacity snapshot of one team for one sprint.
///
/// `now` is used for every date comparison in the computation and is
/// recorded as the snapshot time.
///
/// # Errors
///
/// Returns [`crate::error::CapacityError::SprintNotFound`] or
/// [`crate::error::CapacityError::MissingSprintDates`] if the sprint named in
/// `context` cannot be resolved.
///
/// # Example
///
/// ```
/// use sprint_capacity::calculation::{SnapshotInput, build_snapshot};
/// use sprint_capacity::models::{SnapshotContext, Sprint, TeamMember, WorkItem, WorkingDayPolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let input = SnapshotInput {
///     sprints: vec![Sprint {
///         id: None,
///         name: "Sprint 1".to_string(),
///         path: None,
///         start_date: Some(date(1)),
///         finish_date: Some(date(12)),
///     }],
///     members: vec![TeamMember {
///         unique_name: "alice".to_string(),
///         display_name: None,
///         capacity_per_day: Decimal::new(6, 0),
///         days_off: vec![],
///     }],
///     work_items: vec![WorkItem {
///         id: 1,
///         assigned_to: Some("alice".to_string()),
///         remaining_work: Some(Decimal::new(8, 0)),
///         state: None,
///     }],
/// };
/// let context = SnapshotContext::new("contoso", "Fabrikam", "Platform", "Sprint 1");
/// let now = date(8).and_hms_opt(9, 0, 0).unwrap();
///
/// let snapshot = build_snapshot(context, &input, &WorkingDayPolicy::default(), now)?;
/// assert_eq!(snapshot.num_days_in_sprint, 10);
/// assert_eq!(snapshot.members[0].remaining_sprint_hours, Decimal::new(30, 0));
/// assert_eq!(snapshot.members[0].currently_assigned, Decimal::new(8, 0));
/// # Ok::<(), sprint_capacity::error::CapacityError>(())
/// ```
pub fn build_snapshot(
    context: SnapshotContext,
    input: &SnapshotInput,
    policy: &WorkingDayPolicy,
    now: NaiveDateTime,
) -> CapacityResult<Snapshot> {
    let sprint = find_sprint(&input.sprints, &context.sprint)?;
    let num_days_in_sprint = sprint.working_days(policy);

    let availability = compute_member_availability(&sprint, &input.members, policy, now.date());
    let members = apply_assignments(&availability, &input.work_items);

    let snapshot = Snapshot {
        snapshot_id: Uuid::new_v4(),
        context,
        snapshot_datetime: now,
        num_days_in_sprint,
        members,
    };

    info!(
        snapshot_id = %snapshot.snapshot_id,
        organization = %snapshot.context.organization,
        project = %snapshot.context.project,
        team = %snapshot.context.team,
        sprint = %sprint.name,
        members = snapshot.members.len(),
        work_items = input.work_items.len(),
        num_days_in_sprint,
        "Built capacity snapshot"
    );

    Ok(snapshot)
}
