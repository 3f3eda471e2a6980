//! Team capacity payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CapacityResult;
use crate::models::{DaysOff, TeamMember};

use super::parse_timestamp;

/// The team's capacities for one iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapacityList {
    /// One entry per team member.
    #[serde(default)]
    pub value: Vec<CapacityPayload>,
}

/// A member identity reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    /// The identity's unique name (usually an email address).
    pub unique_name: String,
    /// The identity's display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A member's capacity for one activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPayload {
    /// Hours per working day; absent or null means zero.
    #[serde(default)]
    pub capacity_per_day: Option<Decimal>,
    /// The activity name (e.g. "Development").
    #[serde(default)]
    pub name: Option<String>,
}

/// A time-off interval with service timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaysOffPayload {
    /// First day off.
    pub start: String,
    /// Last day off (inclusive).
    pub end: String,
}

/// One member's capacity entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityPayload {
    /// The member.
    pub team_member: IdentityRef,
    /// Per-activity capacity; only the first entry is used.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub activities: Vec<ActivityPayload>,
    /// Personal time off.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub days_off: Vec<DaysOffPayload>,
}

impl CapacityPayload {
    /// Converts the payload into a [`TeamMember`].
    ///
    /// Capacity is taken from the first activity; a member without activities
    /// has zero capacity. Any unparseable time-off timestamp is an error.
    pub fn to_member(&self) -> CapacityResult<TeamMember> {
        let name = &self.team_member.unique_name;

        let capacity_per_day = self
            .activities
            .first()
            .and_then(|a| a.capacity_per_day)
            .unwrap_or(Decimal::ZERO);

        let days_off = self
            .days_off
            .iter()
            .map(|d| -> CapacityResult<DaysOff> {
                Ok(DaysOff {
                    start: parse_timestamp(&d.start, name, "daysOff.start")?,
                    end: parse_timestamp(&d.end, name, "daysOff.end")?,
                })
            })
            .collect::<CapacityResult<Vec<_>>>()?;

        Ok(TeamMember {
            unique_name: name.clone(),
            display_name: self.team_member.display_name.clone(),
            capacity_per_day,
            days_off,
        })
    }
}

/// Reads a JSON `null` list as an empty one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl CapacityList {
    /// Converts every entry into a [`TeamMember`], keeping roster order.
    ///
    /// The first malformed entry aborts the conversion, so a partially read
    /// roster never reaches the availability calculation.
    pub fn to_members(&self) -> CapacityResult<Vec<TeamMember>> {
        self.value.iter().map(CapacityPayload::to_member).collect()
    }
}
