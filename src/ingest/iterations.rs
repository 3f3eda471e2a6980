//! Iteration list payloads.

use serde::{Deserialize, Serialize};

use crate::error::CapacityResult;
use crate::models::Sprint;

use super::parse_timestamp;

/// The team's iteration list, as returned by the tracking service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IterationList {
    /// The iterations.
    #[serde(default)]
    pub value: Vec<IterationPayload>,
}

/// A single iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationPayload {
    /// The tracker's identifier for the iteration.
    #[serde(default)]
    pub id: Option<String>,
    /// The iteration name.
    pub name: String,
    /// The iteration path.
    #[serde(default)]
    pub path: Option<String>,
    /// Iteration attributes carrying the boundary dates.
    #[serde(default)]
    pub attributes: IterationAttributes,
}

/// Boundary timestamps of an iteration; either may be null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationAttributes {
    /// Start timestamp, e.g. `2024-01-01T00:00:00Z`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Finish timestamp, e.g. `2024-01-12T00:00:00Z`.
    #[serde(default)]
    pub finish_date: Option<String>,
}

impl IterationPayload {
    /// Converts the payload into a [`Sprint`], parsing any present timestamps.
    pub fn to_sprint(&self) -> CapacityResult<Sprint> {
        let parse = |raw: &Option<String>, field: &str| {
            raw.as_deref()
                .map(|s| parse_timestamp(s, &self.name, field))
                .transpose()
        };

        Ok(Sprint {
            id: self.id.clone(),
            name: self.name.clone(),
            path: self.path.clone(),
            start_date: parse(&self.attributes.start_date, "attributes.startDate")?,
            finish_date: parse(&self.attributes.finish_date, "attributes.finishDate")?,
        })
    }
}

impl IterationList {
    /// Converts every iteration into a [`Sprint`], in list order.
    pub fn to_sprints(&self) -> CapacityResult<Vec<Sprint>> {
        self.value.iter().map(IterationPayload::to_sprint).collect()
    }
}
