//! Member availability calculation.
//!
//! This module turns a sprint window and the team's capacity records into one
//! [`AvailabilityRecord`] per member: the hours the member can give over the
//! whole sprint, and the hours left from today once time off is removed.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::CapacityResult;
use crate::models::{AvailabilityRecord, Sprint, TeamMember, WorkingDayPolicy};

use super::sprint_resolution::{ResolvedSprint, find_sprint};
use super::working_days::count_working_days;

/// Computes availability for every member of a team for the named sprint.
///
/// `now` is captured once by the caller; it is normalized to midnight, so
/// only its date matters.
///
/// # Arguments
///
/// * `sprints` - The team's iterations
/// * `sprint_name` - The sprint to compute for (trimmed, case-insensitive)
/// * `members` - The team's capacity records, in roster order
/// * `policy` - The weekdays considered working days
/// * `now` - The moment of computation
///
/// # Returns
///
/// One record per member in input order, with `currently_assigned` at zero.
/// An empty team yields an empty list.
///
/// # Errors
///
/// Sprint resolution errors are returned unchanged and no records are produced.
///
/// # Example
///
/// ```
/// use sprint_capacity::calculation::compute_availability;
/// use sprint_capacity::models::{DaysOff, Sprint, TeamMember, WorkingDayPolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let sprints = vec![Sprint {
///     id: None,
///     name: "Sprint 1".to_string(),
///     path: None,
///     start_date: Some(date(1)),
///     finish_date: Some(date(12)),
/// }];
/// let members = vec![TeamMember {
///     unique_name: "alice".to_string(),
///     display_name: None,
///     capacity_per_day: Decimal::new(6, 0),
///     days_off: vec![DaysOff { start: date(9), end: date(9) }],
/// }];
/// let now = date(8).and_hms_opt(14, 30, 0).unwrap();
///
/// let records = compute_availability(&sprints, "Sprint 1", &members, &WorkingDayPolicy::default(), now)?;
/// assert_eq!(records[0].total_sprint_hours, Decimal::new(60, 0));
/// assert_eq!(records[0].remaining_sprint_hours, Decimal::new(24, 0));
/// # Ok::<(), sprint_capacity::error::CapacityError>(())
/// ```
pub fn compute_availability(
    sprints: &[Sprint],
    sprint_name: &str,
    members: &[TeamMember],
    policy: &WorkingDayPolicy,
    now: NaiveDateTime,
) -> CapacityResult<Vec<AvailabilityRecord>> {
    let sprint = find_sprint(sprints, sprint_name)?;
    Ok(compute_member_availability(
        &sprint,
        members,
        policy,
        now.date(),
    ))
}

/// Computes availability for every member against an already-resolved sprint.
///
/// Time off reduces remaining availability only on days that are working
/// days and fall on or after `today`; remaining hours are clamped at zero.
pub fn compute_member_availability(
    sprint: &ResolvedSprint,
    members: &[TeamMember],
    policy: &WorkingDayPolicy,
    today: NaiveDate,
) -> Vec<AvailabilityRecord> {
    if members.is_empty() {
        warn!(sprint = %sprint.name, "No team members to compute availability for");
        return Vec::new();
    }

    let total_days = sprint.working_days(policy);
    let remaining_days = sprint.remaining_working_days(policy, today);

    debug!(
        sprint = %sprint.name,
        start = %sprint.start,
        finish = %sprint.finish,
        %today,
        total_days,
        remaining_days,
        "Counted sprint working days"
    );

    members
        .iter()
        .map(|member| member_availability(member, total_days, remaining_days, policy, today))
        .collect()
}

fn member_availability(
    member: &TeamMember,
    total_days: u32,
    remaining_days: u32,
    policy: &WorkingDayPolicy,
    today: NaiveDate,
) -> AvailabilityRecord {
    let total_sprint_hours = member.capacity_per_day * Decimal::from(total_days);

    let days_off = upcoming_working_days_off(member, policy, today);
    let available_days = (i64::from(remaining_days) - days_off).max(0);
    let remaining_sprint_hours = member.capacity_per_day * Decimal::from(available_days);

    debug!(
        member = %member.unique_name,
        capacity_per_day = %member.capacity_per_day,
        days_off,
        available_days,
        "Computed member availability"
    );

    AvailabilityRecord::new(
        member.unique_name.clone(),
        total_sprint_hours,
        remaining_sprint_hours,
    )
}

/// Counts the member's days off that are working days on or after `today`.
///
/// Overlapping intervals are not merged: a day covered twice counts twice.
fn upcoming_working_days_off(
    member: &TeamMember,
    policy: &WorkingDayPolicy,
    today: NaiveDate,
) -> i64 {
    member
        .days_off
        .iter()
        .map(|interval| {
            i64::from(count_working_days(
                interval.start,
                interval.end,
                policy,
                Some(today),
            ))
        })
        .sum()
}
