//! Configuration and error types for rank grouping.
//!
//! This module defines the public configuration surface for the grouping
//! layer. It is intentionally free of any I/O or environment-dependent
//! behavior so that grouping is a pure function of `(scores, config)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the grouping layer.
///
/// All errors are typed, cloneable, and comparable so callers can handle
/// specific cases and tests can assert on exact failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroupingError {
    /// The score sequence has no elements; there is nothing to seed group 0.
    #[error("score sequence is empty; grouping requires at least one score")]
    EmptyScores,
    /// A score is NaN or infinite.
    #[error("score at position {index} is not finite")]
    NonFiniteScore { index: usize },
    /// The sequence is not sorted in non-increasing order. Grouping never
    /// re-sorts: group-0 semantics depend on the caller-supplied order.
    #[error("scores must be non-increasing: position {index} exceeds its predecessor")]
    NotDescending { index: usize },
    /// A configuration value is out of range.
    #[error("invalid grouping config: {0}")]
    InvalidConfig(String),
    /// The density clusterer emitted labels out of position order, which
    /// would silently corrupt outlier consolidation.
    #[error("cluster label at position {position} regresses below an earlier label")]
    ClusterOrderViolation { position: usize },
}

/// Parameters handed to a [`DensityClusterer`](crate::DensityClusterer).
///
/// `min_samples` is the smallest run of mutually dense points that counts
/// as a cluster; anything smaller is noise. `xi` is the cluster-separation
/// sensitivity: a gap must exceed the local spacing by more than a factor
/// of `1 / (1 - xi)` to split two groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityParams {
    /// Minimum cluster size. Must be at least 2.
    pub min_samples: usize,
    /// Steepness sensitivity in the open interval (0, 1).
    pub xi: f64,
}

impl Default for DensityParams {
    fn default() -> Self {
        Self {
            min_samples: 2,
            xi: 0.05,
        }
    }
}

impl DensityParams {
    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), GroupingError> {
        if self.min_samples < 2 {
            return Err(GroupingError::InvalidConfig(
                "min_samples must be at least 2".into(),
            ));
        }
        if !(self.xi > 0.0 && self.xi < 1.0) {
            return Err(GroupingError::InvalidConfig(
                "xi must lie strictly between 0.0 and 1.0".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the full grouping pipeline.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// pipeline configs or loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Configuration schema version. Any change that can alter a produced
    /// grouping must bump this so old results remain replayable.
    pub version: u32,
    /// Density clustering parameters.
    #[serde(default)]
    pub density: DensityParams,
    /// Largest density winner-tier size that is trusted outright. When the
    /// density grouping puts at most this many positions in group 0, it is
    /// selected without consulting the gap partition.
    #[serde(default = "GroupingConfig::default_density_trust_max")]
    pub density_trust_max: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            version: 1,
            density: DensityParams::default(),
            density_trust_max: Self::default_density_trust_max(),
        }
    }
}

impl GroupingConfig {
    pub(crate) fn default_density_trust_max() -> usize {
        3
    }

    /// Create a configuration with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum density cluster size. Typical value: 2.
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.density.min_samples = min_samples;
        self
    }

    /// Set the cluster-separation sensitivity. Typical value: 0.05.
    /// Smaller xi splits on smaller relative gap jumps.
    pub fn with_xi(mut self, xi: f64) -> Self {
        self.density.xi = xi;
        self
    }

    /// Set the winner-tier size below which the density grouping is
    /// trusted without comparison. Typical value: 3.
    pub fn with_density_trust_max(mut self, max: usize) -> Self {
        self.density_trust_max = max;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GroupingError> {
        if self.version == 0 {
            return Err(GroupingError::InvalidConfig(
                "version must be greater than zero".into(),
            ));
        }
        self.density.validate()
    }
}
