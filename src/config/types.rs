//! Configuration types for capacity reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::{Deserialize, Serialize};

use crate::models::WorkingDayPolicy;

/// Default work item field holding the assignee identity.
pub const DEFAULT_ASSIGNED_TO_FIELD: &str = "System.AssignedTo";
/// Default work item field holding the remaining-work estimate in hours.
pub const DEFAULT_REMAINING_WORK_FIELD: &str = "Microsoft.VSTS.Scheduling.RemainingWork";
/// Default work item field holding the workflow state.
pub const DEFAULT_STATE_FIELD: &str = "System.State";

/// Names of the work item fields read from a work item batch.
///
/// Trackers with customized processes store assignee and estimate in
/// differently-named fields; these names select them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemFields {
    /// Field holding an identity object with a `uniqueName`.
    #[serde(default = "default_assigned_to")]
    pub assigned_to: String,
    /// Field holding the remaining-work number.
    #[serde(default = "default_remaining_work")]
    pub remaining_work: String,
    /// Field holding the workflow state string.
    #[serde(default = "default_state")]
    pub state: String,
}

fn default_assigned_to() -> String {
    DEFAULT_ASSIGNED_TO_FIELD.to_string()
}

fn default_remaining_work() -> String {
    DEFAULT_REMAINING_WORK_FIELD.to_string()
}

fn default_state() -> String {
    DEFAULT_STATE_FIELD.to_string()
}

impl Default for WorkItemFields {
    fn default() -> Self {
        Self {
            assigned_to: default_assigned_to(),
            remaining_work: default_remaining_work(),
            state: default_state(),
        }
    }
}

/// The configuration file structure (`capacity.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapacityConfigFile {
    /// Weekday names considered working days; Monday to Friday when absent.
    #[serde(default)]
    pub working_days: Option<Vec<String>>,
    /// Work item field names.
    #[serde(default)]
    pub fields: WorkItemFields,
}

/// The validated engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// The working-day policy applied to every computation.
    policy: WorkingDayPolicy,
    /// Work item field names.
    fields: WorkItemFields,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(policy: WorkingDayPolicy, fields: WorkItemFields) -> Self {
        Self { policy, fields }
    }

    /// Returns the working-day policy.
    pub fn policy(&self) -> &WorkingDayPolicy {
        &self.policy
    }

    /// Returns the work item field names.
    pub fn fields(&self) -> &WorkItemFields {
        &self.fields
    }
}
