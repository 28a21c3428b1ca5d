//! Density grouping: cluster a descending score sequence by local density,
//! then rewrite noise points into their own singleton groups.
//!
//! The clustering step sits behind [`DensityClusterer`] so any density
//! implementation honoring the label contract is substitutable: labels are
//! 0-based, issued in first-appearance order along the input, with
//! [`NOISE`] marking points that belong to no sufficiently dense run.

use crate::config::{DensityParams, GroupingError};

/// Sentinel label for points assigned to no cluster.
pub const NOISE: i64 = -1;

/// A density clustering capability over 1-D points.
///
/// Implementations must be deterministic and must emit non-noise labels in
/// non-decreasing order along the input; [`consolidate_outliers`] checks
/// that post-condition and fails rather than trusting it silently.
pub trait DensityClusterer {
    /// Label each point with a 0-based cluster id or [`NOISE`].
    fn cluster(&self, points: &[f64], params: &DensityParams) -> Result<Vec<i64>, GroupingError>;
}

/// ξ-steepness density clustering specialized to sorted 1-D points.
///
/// For a descending sequence the reachability structure of OPTICS with
/// `min_samples = 2` collapses onto the consecutive gaps, so clustering
/// reduces to finding gaps that are steeply larger than their local
/// surroundings. A gap `g[i]` is a cluster boundary when
///
/// ```text
/// g[i] * (1 - xi) > min(adjacent gaps)
/// ```
///
/// Maximal boundary-free runs are clusters; runs shorter than
/// `min_samples` are noise. A lone gap (two points) has no neighboring gap
/// to contrast against and never splits; fewer than two points are all
/// noise since no run can reach `min_samples`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XiDensity;

impl DensityClusterer for XiDensity {
    fn cluster(&self, points: &[f64], params: &DensityParams) -> Result<Vec<i64>, GroupingError> {
        params.validate()?;
        let n = points.len();
        if n < 2 {
            return Ok(vec![NOISE; n]);
        }

        let gaps: Vec<f64> = points.windows(2).map(|w| w[0] - w[1]).collect();
        let boundaries = boundary_gaps(&gaps, params.xi);

        // Label maximal runs between boundaries; short runs stay NOISE.
        let mut labels = vec![NOISE; n];
        let mut next_label: i64 = 0;
        let mut run_start = 0usize;
        for i in 0..n {
            let run_ends = i + 1 == n || boundaries[i];
            if !run_ends {
                continue;
            }
            if i + 1 - run_start >= params.min_samples {
                for label in &mut labels[run_start..=i] {
                    *label = next_label;
                }
                next_label += 1;
            }
            run_start = i + 1;
        }
        Ok(labels)
    }
}

/// Mark each gap that splits two clusters. `boundaries[i]` refers to the
/// gap between positions `i` and `i + 1`.
fn boundary_gaps(gaps: &[f64], xi: f64) -> Vec<bool> {
    let m = gaps.len();
    let mut boundaries = vec![false; m];
    if m < 2 {
        return boundaries;
    }
    for i in 0..m {
        let floor = match (i.checked_sub(1).map(|j| gaps[j]), gaps.get(i + 1)) {
            (Some(left), Some(right)) => left.min(*right),
            (Some(left), None) => left,
            (None, Some(right)) => *right,
            (None, None) => unreachable!("m >= 2 guarantees a neighbor"),
        };
        if gaps[i] * (1.0 - xi) > floor {
            boundaries[i] = true;
        }
    }
    boundaries
}

/// Rewrite every noise label into its own fresh group id.
///
/// Walks the labels with an `offset` counter: a non-noise label `c` becomes
/// `c + offset`; a noise point becomes `last output + 1` (or `1` when the
/// output is still empty) and bumps `offset`, shifting every later real
/// cluster past the id slot the noise point consumed.
///
/// Post-condition check: non-noise input labels must never decrease across
/// positions, and no label other than [`NOISE`] may be negative. Violations
/// return [`GroupingError::ClusterOrderViolation`].
pub fn consolidate_outliers(labels: &[i64]) -> Result<Vec<u32>, GroupingError> {
    let mut curated: Vec<u32> = Vec::with_capacity(labels.len());
    let mut offset: i64 = 0;
    let mut last_cluster: Option<i64> = None;

    for (position, &label) in labels.iter().enumerate() {
        if label == NOISE {
            let next = curated.last().map_or(1, |last| last + 1);
            curated.push(next);
            offset += 1;
            continue;
        }
        if label < 0 || last_cluster.is_some_and(|prev| label < prev) {
            return Err(GroupingError::ClusterOrderViolation { position });
        }
        last_cluster = Some(label);
        curated.push((label + offset) as u32);
    }
    Ok(curated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DensityParams {
        DensityParams::default()
    }

    #[test]
    fn consolidation_matches_contractual_example() {
        let labels = [-1, 1, 1, 2, -1, 3, 3];
        assert_eq!(
            consolidate_outliers(&labels).unwrap(),
            vec![1, 2, 2, 3, 4, 5, 5]
        );
    }

    #[test]
    fn consolidation_passes_through_noise_free_labels() {
        assert_eq!(
            consolidate_outliers(&[0, 0, 1, 1, 2]).unwrap(),
            vec![0, 0, 1, 1, 2]
        );
    }

    #[test]
    fn consolidation_of_leading_and_trailing_noise() {
        assert_eq!(consolidate_outliers(&[-1, 0, 0, -1]).unwrap(), vec![1, 1, 1, 2]);
    }

    #[test]
    fn consolidation_of_all_noise() {
        assert_eq!(consolidate_outliers(&[-1, -1, -1]).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn consolidation_rejects_label_regression() {
        let err = consolidate_outliers(&[0, 1, 0]).unwrap_err();
        assert_eq!(err, GroupingError::ClusterOrderViolation { position: 2 });
    }

    #[test]
    fn consolidation_rejects_unknown_negative_label() {
        let err = consolidate_outliers(&[0, -2]).unwrap_err();
        assert_eq!(err, GroupingError::ClusterOrderViolation { position: 1 });
    }

    #[test]
    fn consolidated_ids_never_decrease() {
        let curated = consolidate_outliers(&[-1, 0, 0, -1, 1, 1, -1]).unwrap();
        for pair in curated.windows(2) {
            assert!(pair[0] <= pair[1], "ids regressed: {curated:?}");
        }
    }

    #[test]
    fn clusters_tight_runs_and_isolates_outlier() {
        let points = [0.90, 0.89, 0.88, 0.50, 0.10, 0.09];
        let labels = XiDensity.cluster(&points, &params()).unwrap();
        assert_eq!(labels, vec![0, 0, 0, NOISE, 1, 1]);
    }

    #[test]
    fn noise_between_two_tight_pairs() {
        // Gaps 0.5, 0.01, 0.5: the middle pair is dense, the ends are not.
        let points = [1.5, 1.0, 0.99, 0.49];
        let labels = XiDensity.cluster(&points, &params()).unwrap();
        assert_eq!(labels, vec![NOISE, 0, 0, NOISE]);
    }

    #[test]
    fn leading_outlier_is_noise() {
        let points = [0.9, 0.2, 0.19, 0.18];
        let labels = XiDensity.cluster(&points, &params()).unwrap();
        assert_eq!(labels, vec![NOISE, 0, 0, 0]);
    }

    #[test]
    fn all_equal_scores_form_one_cluster() {
        let points = [0.5, 0.5, 0.5, 0.5];
        let labels = XiDensity.cluster(&points, &params()).unwrap();
        assert_eq!(labels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn uniform_spacing_forms_one_cluster() {
        // Uniform gaps mean uniform density: no contrast, no boundary.
        let points = [0.9, 0.6, 0.3];
        let labels = XiDensity.cluster(&points, &params()).unwrap();
        assert_eq!(labels, vec![0, 0, 0]);
    }

    #[test]
    fn two_points_form_one_cluster() {
        let labels = XiDensity.cluster(&[0.9, 0.1], &params()).unwrap();
        assert_eq!(labels, vec![0, 0]);
    }

    #[test]
    fn fewer_than_two_points_are_noise() {
        assert_eq!(XiDensity.cluster(&[0.7], &params()).unwrap(), vec![NOISE]);
        assert_eq!(XiDensity.cluster(&[], &params()).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn min_samples_governs_run_size() {
        // With min_samples = 3 the trailing pair is too small to cluster.
        let cfg = DensityParams {
            min_samples: 3,
            xi: 0.05,
        };
        let points = [0.90, 0.89, 0.88, 0.50, 0.10, 0.09];
        let labels = XiDensity.cluster(&points, &cfg).unwrap();
        assert_eq!(labels, vec![0, 0, 0, NOISE, NOISE, NOISE]);
    }

    #[test]
    fn clustering_is_deterministic() {
        let points = [0.91, 0.90, 0.52, 0.51, 0.50, 0.11];
        let first = XiDensity.cluster(&points, &params()).unwrap();
        for _ in 0..8 {
            assert_eq!(XiDensity.cluster(&points, &params()).unwrap(), first);
        }
    }
}
