//! Workspace umbrella crate for catrank: taxonomy category ranking for
//! software repositories and packages via embedding similarity.
//!
//! The pipeline has three layers, each its own crate:
//!
//! - [`sources`] — boundary collaborators: metadata-fetch and embedding
//!   interfaces, README cleanup, token budgets. Everything that talks to
//!   the outside world implements these traits and owns its own transport
//!   and retry policy.
//! - [`grouping`] — the pure core: partition a descending similarity score
//!   sequence into relevance tiers via density clustering and gap
//!   statistics, consolidated by a selectivity heuristic.
//! - [`classifier`] / [`report`] — the engine that runs grouping over
//!   scored categories and formats the `winner` /
//!   `prediction_cluster_raw` / `prediction_distance_raw` payload.
//!
//! This crate stitches them together so callers can rank with a single
//! entry point, and adds YAML configuration loading.
//!
//! ```
//! use catrank::{rank_categories_default, CategoryScore};
//!
//! let report = rank_categories_default(&[
//!     CategoryScore::new("database", "sql, storage, query", 0.92),
//!     CategoryScore::new("caching", "cache, memoization", 0.91),
//!     CategoryScore::new("frontend", "ui, css", 0.40),
//! ])
//! .unwrap();
//!
//! assert_eq!(report.winner, vec!["database", "caching"]);
//! println!("{}", report.to_json_pretty().unwrap());
//! ```

pub use classifier::{CategoryScore, Classifier, ClassifyError};
pub use grouping::{
    consolidate_outliers, gap_partition, group_scores, group_scores_with, Consolidation,
    DensityClusterer, DensityParams, GroupingConfig, GroupingError, GroupingStrategy,
    ScoreSequence, XiDensity, NOISE,
};
pub use report::{format_report, CategoryRow, RankReport, ReportError};
pub use sources::{
    clean_text, cosine_similarity, strip_badges, strip_markup, EmbedError, Embedder,
    ItemMetadata, ItemRef, MetadataError, MetadataSource, StubEmbedder, TokenBudget,
    WhitespaceTokenBudget, DEFAULT_TOKEN_BUDGET,
};

mod config;

pub use crate::config::{CatrankConfig, ConfigLoadError, GroupingYamlConfig};

/// Rank scored categories with explicit grouping configuration.
///
/// `scored` must be sorted descending by distance; the order contract is
/// enforced, never repaired.
pub fn rank_categories(
    scored: &[CategoryScore],
    cfg: &GroupingConfig,
) -> Result<RankReport, ClassifyError> {
    Classifier::new(cfg.clone()).classify(scored)
}

/// Rank scored categories with the default configuration.
pub fn rank_categories_default(scored: &[CategoryScore]) -> Result<RankReport, ClassifyError> {
    rank_categories(scored, &GroupingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_categories_runs_the_full_pipeline() {
        let report = rank_categories_default(&[
            CategoryScore::new("A", "", 0.90),
            CategoryScore::new("B", "", 0.85),
            CategoryScore::new("C", "", 0.84),
            CategoryScore::new("D", "", 0.50),
            CategoryScore::new("E", "", 0.10),
        ])
        .unwrap();

        assert_eq!(report.winner, vec!["A", "B", "C"]);
        assert_eq!(report.prediction_distance_raw.len(), 5);
    }

    #[test]
    fn rank_categories_respects_config() {
        let scored: Vec<CategoryScore> = [0.9, 0.89, 0.88, 0.87, 0.86, 0.1]
            .iter()
            .enumerate()
            .map(|(i, &d)| CategoryScore::new(format!("cat-{i}"), "", d))
            .collect();

        let default_report = rank_categories(&scored, &GroupingConfig::default()).unwrap();
        let strict = GroupingConfig::new().with_density_trust_max(0);
        let strict_report = rank_categories(&scored, &strict).unwrap();

        // Same rows, possibly different grouping; both stay complete.
        assert_eq!(default_report.prediction_distance_raw.len(), 6);
        assert_eq!(strict_report.prediction_distance_raw.len(), 6);
    }

    #[test]
    fn rank_categories_propagates_contract_errors() {
        let err = rank_categories_default(&[
            CategoryScore::new("low", "", 0.1),
            CategoryScore::new("high", "", 0.9),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Grouping(GroupingError::NotDescending { .. })
        ));
    }
}
