//! Work item payloads.
//!
//! Work item fields arrive as a map keyed by tracker field reference names.
//! Which keys hold the assignee, the remaining work and the state is
//! configurable through [`WorkItemFields`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::WorkItemFields;
use crate::models::WorkItem;

/// A batch of work items with their requested fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkItemBatch {
    /// The work items; a batch without `value` is empty.
    #[serde(default)]
    pub value: Vec<WorkItemPayload>,
}

/// A single work item with its raw field map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItemPayload {
    /// The tracker's identifier for the item.
    pub id: u64,
    /// Field reference name to value.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl WorkItemPayload {
    /// Extracts the fields capacity reconciliation needs.
    ///
    /// Missing or unusable fields become `None` rather than errors.
    pub fn to_work_item(&self, fields: &WorkItemFields) -> WorkItem {
        WorkItem {
            id: self.id,
            assigned_to: self.fields.get(&fields.assigned_to).and_then(identity_name),
            remaining_work: self
                .fields
                .get(&fields.remaining_work)
                .and_then(hours_value),
            state: self
                .fields
                .get(&fields.state)
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

impl WorkItemBatch {
    /// Converts every item in the batch, keeping batch order.
    pub fn to_work_items(&self, fields: &WorkItemFields) -> Vec<WorkItem> {
        self.value
            .iter()
            .map(|item| item.to_work_item(fields))
            .collect()
    }
}

/// Reads an identity field: an object with `uniqueName`, or a bare string.
fn identity_name(value: &Value) -> Option<String> {
    match value {
        Value::Object(identity) => identity
            .get("uniqueName")
            .and_then(Value::as_str)
            .map(str::to_string),
        Value::String(name) => Some(name.clone()),
        _ => None,
    }
}

fn hours_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            let repr = n.to_string();
            Decimal::from_str(&repr)
                .or_else(|_| Decimal::from_scientific(&repr))
                .ok()
        }
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// The work item links of an iteration.
///
/// Backlog items appear as links without a source; their child tasks appear
/// as links whose source is the parent item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationWorkItems {
    /// Parent/child links between the iteration's work items.
    #[serde(default)]
    pub work_item_relations: Vec<WorkItemLink>,
}

/// A link between two work items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItemLink {
    /// The parent item, or null for top-level items.
    #[serde(default)]
    pub source: Option<WorkItemReference>,
    /// The linked item.
    pub target: WorkItemReference,
}

/// A reference to a work item by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemReference {
    /// The work item id.
    pub id: u64,
}

impl IterationWorkItems {
    /// Returns ids of items that have a parent, in link order.
    ///
    /// These are the tasks whose remaining work the fetch layer should
    /// request in a work item batch.
    pub fn child_task_ids(&self) -> Vec<u64> {
        self.work_item_relations
            .iter()
            .filter(|link| link.source.is_some())
            .map(|link| link.target.id)
            .collect()
    }
}
