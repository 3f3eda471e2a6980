//! Request types for the Sprint Capacity Engine API.
//!
//! This module defines the JSON request structure for the `/snapshot` endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calculation::SnapshotInput;
use crate::config::WorkItemFields;
use crate::error::CapacityResult;
use crate::ingest::{CapacityList, IterationList, WorkItemBatch};
use crate::models::SnapshotContext;

/// Request body for the `/snapshot` endpoint.
///
/// Carries the snapshot identifiers and the three payloads already fetched
/// from the tracking service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRequest {
    /// The organization owning the project.
    pub organization: String,
    /// The project the team belongs to.
    pub project: String,
    /// The team whose capacity is captured.
    pub team: String,
    /// The sprint to compute capacity for.
    pub sprint: String,
    /// The moment to compute for; the time of the request when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
    /// The team's iteration list.
    pub iterations: IterationList,
    /// The team's capacities for the sprint.
    pub capacities: CapacityList,
    /// The sprint's work item batch.
    #[serde(default)]
    pub work_items: WorkItemBatch,
}

impl SnapshotRequest {
    /// Returns the snapshot identifiers carried by the request.
    pub fn context(&self) -> SnapshotContext {
        SnapshotContext::new(
            self.organization.clone(),
            self.project.clone(),
            self.team.clone(),
            self.sprint.clone(),
        )
    }

    /// Converts the payloads into domain inputs.
    ///
    /// Fails on the first malformed timestamp.
    pub fn to_input(&self, fields: &WorkItemFields) -> CapacityResult<SnapshotInput> {
        Ok(SnapshotInput {
            sprints: self.iterations.to_sprints()?,
            members: self.capacities.to_members()?,
            work_items: self.work_items.to_work_items(fields),
        })
    }
}
