//! Conversion of tracking-service payloads into domain models.
//!
//! The fetch layer delivers the iteration list, team capacities, and work
//! item batch as JSON already retrieved from the tracking service. This
//! module deserializes those shapes and converts them into [`crate::models`]
//! types, reporting unparseable timestamps as
//! [`CapacityError::MalformedRecord`].

mod capacities;
mod iterations;
mod work_items;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CapacityError, CapacityResult};

pub use capacities::{ActivityPayload, CapacityList, CapacityPayload, DaysOffPayload, IdentityRef};
pub use iterations::{IterationAttributes, IterationList, IterationPayload};
pub use work_items::{
    IterationWorkItems, WorkItemBatch, WorkItemLink, WorkItemPayload, WorkItemReference,
};

/// Timestamp format used by the tracking service (UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses a service timestamp and truncates it to its calendar day.
///
/// # Example
///
/// ```
/// use sprint_capacity::ingest::parse_timestamp;
/// use chrono::NaiveDate;
///
/// let date = parse_timestamp("2024-01-09T00:00:00Z", "alice", "daysOff.start")?;
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
///
/// assert!(parse_timestamp("09/01/2024", "alice", "daysOff.start").is_err());
/// # Ok::<(), sprint_capacity::error::CapacityError>(())
/// ```
pub fn parse_timestamp(raw: &str, record: &str, field: &str) -> CapacityResult<NaiveDate> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|dt| dt.date())
        .map_err(|e| CapacityError::MalformedRecord {
            record: record.to_string(),
            field: field.to_string(),
            value: raw.to_string(),
            message: e.to_string(),
        })
}
