//! YAML configuration file support for catrank.
//!
//! Lets deployments define the grouping parameters in a single YAML file
//! and load them at runtime instead of constructing configs in code.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # catrank pipeline configuration
//! version: "1.0"
//! name: "default taxonomy ranking"
//!
//! grouping:
//!   min_samples: 2
//!   xi: 0.05
//!   density_trust_max: 3
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use grouping::GroupingConfig;

/// Configuration format versions this build understands.
const SUPPORTED_VERSIONS: &[&str] = &["1.0"];

/// Errors that can occur when loading a YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the catrank pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatrankConfig {
    /// Configuration format version.
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Grouping stage configuration.
    #[serde(default)]
    pub grouping: GroupingYamlConfig,
}

/// Grouping section of the YAML file. Every field is optional and falls
/// back to the crate default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GroupingYamlConfig {
    #[serde(default = "GroupingYamlConfig::default_min_samples")]
    pub min_samples: usize,
    #[serde(default = "GroupingYamlConfig::default_xi")]
    pub xi: f64,
    #[serde(default = "GroupingYamlConfig::default_density_trust_max")]
    pub density_trust_max: usize,
}

impl GroupingYamlConfig {
    fn default_min_samples() -> usize {
        GroupingConfig::default().density.min_samples
    }

    fn default_xi() -> f64 {
        GroupingConfig::default().density.xi
    }

    fn default_density_trust_max() -> usize {
        GroupingConfig::default().density_trust_max
    }
}

impl Default for GroupingYamlConfig {
    fn default() -> Self {
        Self {
            min_samples: Self::default_min_samples(),
            xi: Self::default_xi(),
            density_trust_max: Self::default_density_trust_max(),
        }
    }
}

impl CatrankConfig {
    /// Load and validate a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate a configuration from a YAML string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigLoadError> {
        let config: CatrankConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the version tag and the grouping parameters.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if !SUPPORTED_VERSIONS.contains(&self.version.as_str()) {
            return Err(ConfigLoadError::UnsupportedVersion(self.version.clone()));
        }
        self.to_grouping_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }

    /// Convert the grouping section into the core config type.
    pub fn to_grouping_config(&self) -> GroupingConfig {
        GroupingConfig::new()
            .with_min_samples(self.grouping.min_samples)
            .with_xi(self.grouping.xi)
            .with_density_trust_max(self.grouping.density_trust_max)
    }
}
