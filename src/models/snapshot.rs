//! Capacity snapshot models.
//!
//! This module contains the [`Snapshot`] type, the terminal artifact of a
//! capacity computation, and its flat tabular form [`SnapshotRow`].

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AvailabilityRecord;

/// Identifies which sprint of which team a snapshot describes.
///
/// # Example
///
/// ```
/// use sprint_capacity::models::SnapshotContext;
///
/// let context = SnapshotContext::new("contoso", "Fabrikam", "Platform Team", "Sprint 12");
/// assert_eq!(context.team, "Platform Team");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotContext {
    /// The organization owning the project.
    pub organization: String,
    /// The project the team belongs to.
    pub project: String,
    /// The team whose capacity is captured.
    pub team: String,
    /// The requested sprint name.
    pub sprint: String,
}

impl SnapshotContext {
    /// Creates a new snapshot context.
    pub fn new(
        organization: impl Into<String>,
        project: impl Into<String>,
        team: impl Into<String>,
        sprint: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            project: project.into(),
            team: team.into(),
            sprint: sprint.into(),
        }
    }
}

/// The capacity of every member of a team for one sprint at one moment.
///
/// Immutable once constructed by the snapshot builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Unique identifier for this snapshot.
    pub snapshot_id: Uuid,
    /// Sprint, team, project and organization identifiers.
    #[serde(flatten)]
    pub context: SnapshotContext,
    /// The moment the snapshot was computed for.
    #[serde(with = "snapshot_datetime_format")]
    pub snapshot_datetime: NaiveDateTime,
    /// Total working days in the sprint.
    pub num_days_in_sprint: u32,
    /// One record per team member, in roster order.
    pub members: Vec<AvailabilityRecord>,
}

impl Snapshot {
    /// Flattens the snapshot into one row per member.
    ///
    /// The snapshot-level identifiers are replicated on every row, matching
    /// the layout expected by tabular exports.
    pub fn rows(&self) -> Vec<SnapshotRow> {
        self.members
            .iter()
            .map(|record| SnapshotRow {
                name: record.name.clone(),
                total_sprint_hours: record.total_sprint_hours,
                remaining_sprint_hours: record.remaining_sprint_hours,
                currently_assigned: record.currently_assigned,
                sprint: self.context.sprint.clone(),
                team: self.context.team.clone(),
                project: self.context.project.clone(),
                organization: self.context.organization.clone(),
                snapshot_datetime: self.snapshot_datetime,
                num_days_in_sprint: self.num_days_in_sprint,
            })
            .collect()
    }

    /// Sum of remaining sprint hours across the team.
    pub fn team_remaining_hours(&self) -> Decimal {
        self.members.iter().map(|m| m.remaining_sprint_hours).sum()
    }

    /// Sum of currently assigned hours across the team.
    pub fn team_assigned_hours(&self) -> Decimal {
        self.members.iter().map(|m| m.currently_assigned).sum()
    }
}

/// A flat snapshot row, one per team member.
///
/// Field order is the column order of exported tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    /// The member's unique name.
    pub name: String,
    /// Capacity over every working day of the sprint.
    pub total_sprint_hours: Decimal,
    /// Capacity over the remaining working days, net of time off.
    pub remaining_sprint_hours: Decimal,
    /// Remaining work assigned to the member.
    pub currently_assigned: Decimal,
    /// The requested sprint name.
    pub sprint: String,
    /// The team name.
    pub team: String,
    /// The project name.
    pub project: String,
    /// The organization name.
    pub organization: String,
    /// The moment the snapshot was computed for.
    #[serde(with = "snapshot_datetime_format")]
    pub snapshot_datetime: NaiveDateTime,
    /// Total working days in the sprint.
    pub num_days_in_sprint: u32,
}

/// Renders snapshot timestamps as `YYYY-MM-DD HH:MM:SS`.
mod snapshot_datetime_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
