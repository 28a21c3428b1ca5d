//! Consolidation heuristic: pick between the density-derived assignment
//! and the gap partition for one score sequence.

use serde::{Deserialize, Serialize};

use crate::config::GroupingConfig;

/// Which grouping strategy won the consolidation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingStrategy {
    Density,
    Gap,
}

/// The selected grouping, annotated with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consolidation {
    /// Strategy selected by the heuristic.
    pub strategy: GroupingStrategy,
    /// Group id per position, aligned with the score sequence. Lower ids
    /// mean higher relevance; the minimum id present is the winner tier.
    pub groups: Vec<u32>,
}

/// Choose one grouping for a row.
///
/// A smaller winner tier is treated as higher-confidence discrimination.
/// Density is preferred by default: a density winner tier of at most
/// `density_trust_max` positions is trusted outright, and otherwise density
/// still wins unless the gap partition produced a strictly smaller winner
/// tier.
pub fn consolidate(density: &[u32], gap: &[u32], cfg: &GroupingConfig) -> Consolidation {
    debug_assert_eq!(density.len(), gap.len());
    let density_winners = count_group_zero(density);

    if density_winners <= cfg.density_trust_max || density_winners <= count_group_zero(gap) {
        return Consolidation {
            strategy: GroupingStrategy::Density,
            groups: density.to_vec(),
        };
    }
    Consolidation {
        strategy: GroupingStrategy::Gap,
        groups: gap.to_vec(),
    }
}

fn count_group_zero(groups: &[u32]) -> usize {
    groups.iter().filter(|&&g| g == 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GroupingConfig {
        GroupingConfig::default()
    }

    #[test]
    fn small_density_winner_tier_is_trusted_outright() {
        // Density tier-0 size 2, gap tier-0 size 5.
        let density = [0, 0, 1, 1, 2, 2, 3];
        let gap = [0, 0, 0, 0, 0, 1, 1];
        let chosen = consolidate(&density, &gap, &cfg());
        assert_eq!(chosen.strategy, GroupingStrategy::Density);
        assert_eq!(chosen.groups, density);
    }

    #[test]
    fn density_wins_ties_on_winner_tier_size() {
        // Both winner tiers have 4 positions; density is preferred.
        let density = [0, 0, 0, 0, 1, 2];
        let gap = [0, 0, 0, 0, 1, 1];
        let chosen = consolidate(&density, &gap, &cfg());
        assert_eq!(chosen.strategy, GroupingStrategy::Density);
    }

    #[test]
    fn gap_wins_when_strictly_more_selective() {
        // Density tier-0 size 6 (> trust max 3), gap tier-0 size 3.
        let density = [0, 0, 0, 0, 0, 0, 1];
        let gap = [0, 0, 0, 1, 1, 2, 2];
        let chosen = consolidate(&density, &gap, &cfg());
        assert_eq!(chosen.strategy, GroupingStrategy::Gap);
        assert_eq!(chosen.groups, gap);
    }

    #[test]
    fn density_without_group_zero_counts_as_empty_winner_tier() {
        // Outlier consolidation can shift every density id past 0; the
        // zero count is then 0 and density is trusted.
        let density = [1, 1, 2, 3];
        let gap = [0, 0, 1, 2];
        let chosen = consolidate(&density, &gap, &cfg());
        assert_eq!(chosen.strategy, GroupingStrategy::Density);
        assert_eq!(chosen.groups, density);
    }

    #[test]
    fn trust_max_is_configurable() {
        let density = [0, 0, 0, 0, 1];
        let gap = [0, 0, 1, 1, 2];
        // Default trust max 3: density tier 4 > 3 and 4 > gap tier 2 → gap.
        assert_eq!(
            consolidate(&density, &gap, &cfg()).strategy,
            GroupingStrategy::Gap
        );
        // Raised trust max admits the density tier outright.
        let relaxed = GroupingConfig::new().with_density_trust_max(4);
        assert_eq!(
            consolidate(&density, &gap, &relaxed).strategy,
            GroupingStrategy::Density
        );
    }
}
