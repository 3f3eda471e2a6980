//! Calculation logic for the Sprint Capacity Engine.
//!
//! This module contains the reconciliation pipeline: working-day counting,
//! sprint resolution, per-member availability, assignment aggregation, and
//! snapshot building. Every function is pure; the moment of computation is
//! always passed in by the caller.

mod assignments;
mod availability;
mod snapshot;
mod sprint_resolution;
mod working_days;

pub use assignments::{apply_assignments, assigned_hours_by_assignee};
pub use availability::{compute_availability, compute_member_availability};
pub use snapshot::{SnapshotInput, build_snapshot};
pub use sprint_resolution::{ResolvedSprint, find_sprint, sprint_name_matches};
pub use working_days::count_working_days;
