//! # catrank Rank Grouping (`grouping`)
//!
//! Partition a descending sequence of similarity scores into discrete
//! relevance groups: which items are genuinely in the same tier as the top
//! match. Two independent strategies run over every sequence and a
//! selectivity heuristic picks between them:
//!
//! 1. **Density grouping** — a ξ-steepness density clustering over the
//!    scores ([`XiDensity`] behind the pluggable [`DensityClusterer`]
//!    trait), followed by [`consolidate_outliers`], which rewrites every
//!    noise point into its own singleton group.
//! 2. **Gap grouping** — [`gap_partition`] starts a new group wherever a
//!    consecutive drop exceeds the population standard deviation of all
//!    drops.
//! 3. **Consolidation** — [`consolidate`] trusts a small density winner
//!    tier outright and otherwise lets the strictly more selective side
//!    win.
//!
//! ## Contract
//!
//! - Input is a [`ScoreSequence`]: non-empty, finite, non-increasing.
//!   Construction fails loudly on violations; the layer never re-sorts,
//!   because group 0 must stay the highest-similarity tier.
//! - The whole layer is a pure function of `(scores, config)`: no I/O, no
//!   randomness, no global state. Identical inputs produce identical
//!   groupings on every run.
//!
//! ## Example
//!
//! ```
//! use grouping::{group_scores, GroupingConfig, ScoreSequence};
//!
//! let scores = ScoreSequence::new(vec![0.90, 0.85, 0.84, 0.50, 0.10]).unwrap();
//! let grouping = group_scores(&scores, &GroupingConfig::default()).unwrap();
//!
//! assert_eq!(grouping.groups.len(), 5);
//! let winner = *grouping.groups.iter().min().unwrap();
//! assert_eq!(grouping.groups.iter().filter(|&&g| g == winner).count(), 3);
//! ```

mod config;
mod consolidate;
mod density;
mod gap;
mod score;

pub use crate::config::{DensityParams, GroupingConfig, GroupingError};
pub use crate::consolidate::{consolidate, Consolidation, GroupingStrategy};
pub use crate::density::{consolidate_outliers, DensityClusterer, XiDensity, NOISE};
pub use crate::gap::gap_partition;
pub use crate::score::ScoreSequence;

/// Current grouping algorithm version for this crate.
pub const GROUPING_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const GROUPING_ALGORITHM: &str = "xidensity_stdgap_v1";

/// Run the full grouping pipeline with the built-in density clusterer.
pub fn group_scores(
    scores: &ScoreSequence,
    cfg: &GroupingConfig,
) -> Result<Consolidation, GroupingError> {
    group_scores_with(&XiDensity, scores, cfg)
}

/// Run the full grouping pipeline with an explicit density clusterer.
///
/// Both strategies are computed independently over the same sequence and
/// the consolidation heuristic selects one.
pub fn group_scores_with(
    clusterer: &dyn DensityClusterer,
    scores: &ScoreSequence,
    cfg: &GroupingConfig,
) -> Result<Consolidation, GroupingError> {
    cfg.validate()?;
    let raw_labels = clusterer.cluster(scores.as_slice(), &cfg.density)?;
    let density_groups = consolidate_outliers(&raw_labels)?;
    let gap_groups = gap_partition(scores);
    Ok(consolidate(&density_groups, &gap_groups, cfg))
}
