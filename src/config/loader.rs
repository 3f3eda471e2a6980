//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CapacityError, CapacityResult};
use crate::models::WorkingDayPolicy;

use super::types::{CapacityConfigFile, EngineConfig, WorkItemFields};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "capacity.yaml";

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// working_days: [Monday, Tuesday, Wednesday, Thursday, Friday]
/// fields:
///   assigned_to: System.AssignedTo
///   remaining_work: Microsoft.VSTS.Scheduling.RemainingWork
///   state: System.State
/// ```
///
/// Every key is optional.
///
/// # Example
///
/// ```no_run
/// use sprint_capacity::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Working days: {:?}", loader.policy().days());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads `capacity.yaml` from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A working day name is not a weekday
    pub fn load<P: AsRef<Path>>(path: P) -> CapacityResult<Self> {
        let path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = path.display().to_string();

        let content = fs::read_to_string(&path).map_err(|_| CapacityError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded capacity configuration");
        Ok(loader)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use sprint_capacity::config::ConfigLoader;
    /// use chrono::Weekday;
    ///
    /// let loader = ConfigLoader::from_yaml_str("working_days: [Sunday, Monday, Tuesday, Wednesday, Thursday]")?;
    /// assert_eq!(loader.policy().days()[0], Weekday::Sun);
    /// assert_eq!(loader.fields().assigned_to, "System.AssignedTo");
    /// # Ok::<(), sprint_capacity::error::CapacityError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> CapacityResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> CapacityResult<Self> {
        // An empty document deserializes to unit, not to a mapping.
        let file: CapacityConfigFile = if content.trim().is_empty() {
            CapacityConfigFile::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| CapacityError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?
        };

        let policy = match file.working_days {
            Some(names) => WorkingDayPolicy::from_names(names)?,
            None => WorkingDayPolicy::default(),
        };

        Ok(Self {
            config: EngineConfig::new(policy, file.fields),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the working-day policy.
    pub fn policy(&self) -> &WorkingDayPolicy {
        self.config.policy()
    }

    /// Returns the work item field names.
    pub fn fields(&self) -> &WorkItemFields {
        self.config.fields()
    }
}
