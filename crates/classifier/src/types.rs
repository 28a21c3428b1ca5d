//! Request and error types for the classification engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use grouping::GroupingError;
use report::ReportError;

/// One taxonomy category with its similarity score against an item.
///
/// The caller supplies these already sorted descending by `distance`; the
/// engine enforces that contract and fails loudly on violations rather
/// than re-sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Taxonomy category name.
    pub category: String,
    /// Keyword string the category was embedded from.
    pub keywords: String,
    /// Cosine-similarity score between item and category embeddings.
    pub distance: f64,
}

impl CategoryScore {
    pub fn new(category: impl Into<String>, keywords: impl Into<String>, distance: f64) -> Self {
        Self {
            category: category.into(),
            keywords: keywords.into(),
            distance,
        }
    }
}

/// Errors produced by the classification engine.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Score validation or grouping failed.
    #[error("grouping error: {0}")]
    Grouping(#[from] GroupingError),
    /// Report formatting failed.
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}
