//! Configuration loading and management for the Sprint Capacity Engine.
//!
//! This module provides functionality to load the engine configuration from
//! YAML: the working-day policy and the work item field names used when
//! reading work item batches.
//!
//! # Example
//!
//! ```no_run
//! use sprint_capacity::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Remaining work field: {}", config.fields().remaining_work);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    CapacityConfigFile, DEFAULT_ASSIGNED_TO_FIELD, DEFAULT_REMAINING_WORK_FIELD,
    DEFAULT_STATE_FIELD, EngineConfig, WorkItemFields,
};
