//! Validated score sequences.
//!
//! Every grouping operation works over a [`ScoreSequence`]: a non-empty,
//! finite, non-increasing sequence of similarity scores. The invariant is
//! checked once at construction and never silently repaired; re-sorting a
//! caller's scores would detach group 0 from the highest-similarity tier.

use crate::config::GroupingError;

/// A descending sequence of finite similarity scores.
///
/// Construction fails loudly on empty input, NaN/infinite values, and any
/// adjacent pair that rises. The inner data is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSequence(Vec<f64>);

impl ScoreSequence {
    /// Validate and wrap a score vector.
    pub fn new(scores: Vec<f64>) -> Result<Self, GroupingError> {
        if scores.is_empty() {
            return Err(GroupingError::EmptyScores);
        }
        for (index, score) in scores.iter().enumerate() {
            if !score.is_finite() {
                return Err(GroupingError::NonFiniteScore { index });
            }
        }
        for (i, pair) in scores.windows(2).enumerate() {
            if pair[1] > pair[0] {
                return Err(GroupingError::NotDescending { index: i + 1 });
            }
        }
        Ok(Self(scores))
    }

    /// Borrow the scores.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of scores. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper and return the raw scores.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for ScoreSequence {
    type Error = GroupingError;

    fn try_from(scores: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(scores)
    }
}

impl AsRef<[f64]> for ScoreSequence {
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}
