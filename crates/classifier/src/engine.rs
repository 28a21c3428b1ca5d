use std::time::Instant;

use tracing::{info, warn, Level};

use grouping::{group_scores, GroupingConfig, GroupingStrategy, ScoreSequence};
use report::{format_report, CategoryRow, RankReport};

use crate::types::{CategoryScore, ClassifyError};


/// Classification engine for one scored item.
///
/// Holds the grouping configuration and turns a descending list of
/// [`CategoryScore`]s into a [`RankReport`]: validate the score order, run
/// both grouping strategies, consolidate, and format.
#[derive(Debug, Clone)]
pub struct Classifier {
    grouping_cfg: GroupingConfig,
}

impl Classifier {
    /// Construct an engine with explicit grouping configuration.
    pub fn new(grouping_cfg: GroupingConfig) -> Self {
        Self { grouping_cfg }
    }

    /// Construct an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GroupingConfig::default())
    }

    /// The grouping configuration in use.
    pub fn config(&self) -> &GroupingConfig {
        &self.grouping_cfg
    }

    /// Rank the supplied categories into relevance tiers.
    ///
    /// `scored` must be sorted descending by `distance`; a violation fails
    /// with a grouping contract error. Either a complete report is
    /// returned or the call fails — no partial results.
    pub fn classify(&self, scored: &[CategoryScore]) -> Result<RankReport, ClassifyError> {
        let start = Instant::now();
        let span = tracing::span!(Level::INFO, "classify.rank", rows = scored.len());
        let _guard = span.enter();

        match self.classify_inner(scored) {
            Ok((report, strategy)) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    strategy = ?strategy,
                    groups = report.prediction_cluster_raw.len(),
                    winner_size = report.winner.len(),
                    elapsed_micros,
                    "classify_success"
                );
                Ok(report)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "classify_failure");
                Err(err)
            }
        }
    }

    fn classify_inner(
        &self,
        scored: &[CategoryScore],
    ) -> Result<(RankReport, GroupingStrategy), ClassifyError> {
        let scores = ScoreSequence::new(scored.iter().map(|s| s.distance).collect())?;
        let grouping = group_scores(&scores, &self.grouping_cfg)?;

        let rows: Vec<CategoryRow> = scored
            .iter()
            .zip(&grouping.groups)
            .map(|(score, &group)| {
                CategoryRow::new(
                    score.category.as_str(),
                    score.keywords.as_str(),
                    score.distance,
                    group,
                )
            })
            .collect();

        let report = format_report(&rows)?;
        Ok((report, grouping.strategy))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}
