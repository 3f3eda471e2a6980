//! Core data models for the Sprint Capacity Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod availability;
mod snapshot;
mod sprint;
mod team_member;
mod work_item;
mod working_day_policy;

pub use availability::AvailabilityRecord;
pub use snapshot::{Snapshot, SnapshotContext, SnapshotRow};
pub use sprint::Sprint;
pub use team_member::{DaysOff, TeamMember};
pub use work_item::WorkItem;
pub use working_day_policy::WorkingDayPolicy;
