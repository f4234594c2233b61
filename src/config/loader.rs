//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the cafe
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{OpsError, OpsResult};

use super::types::{CafeConfig, PolicyConfig, RolesConfig};

/// Loads and provides access to the cafe configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// hands out the parsed [`CafeConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/cafe/
/// ├── roles.yaml     # Role labels, daily rates and the currency tag
/// └── policies.yaml  # Bonus, advance and credential policies
/// ```
///
/// # Example
///
/// ```no_run
/// use cafe_ops::config::ConfigLoader;
/// use cafe_ops::models::Role;
///
/// let loader = ConfigLoader::load("./config/cafe").unwrap();
/// let rate = loader.config().daily_rate(Role::Bartender).unwrap();
/// println!("Bartender daily rate: {}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CafeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/cafe")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> OpsResult<Self> {
        let path = path.as_ref();

        let roles_path = path.join("roles.yaml");
        let roles = Self::load_yaml::<RolesConfig>(&roles_path)?;

        let policies_path = path.join("policies.yaml");
        let policies = Self::load_yaml::<PolicyConfig>(&policies_path)?;

        Ok(Self {
            config: CafeConfig::new(roles, policies),
        })
    }

    /// Wraps an already-constructed configuration, bypassing the
    /// filesystem. Useful for tests and embedded deployments.
    pub fn from_config(config: CafeConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> OpsResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| OpsError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| OpsError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying cafe configuration.
    pub fn config(&self) -> &CafeConfig {
        &self.config
    }
}
