//! # catrank Result Formatting (`report`)
//!
//! Turns a consolidated grouping, per-category labels, and raw similarity
//! distances into the output payload. The payload has exactly three
//! fields:
//!
//! - `winner` — category names in the most relevant tier (minimum group id
//!   present);
//! - `prediction_cluster_raw` — group id (stringified) → ordered category
//!   names, preserving original row order within and across groups;
//! - `prediction_distance_raw` — category name → raw distance, independent
//!   of grouping.
//!
//! ## Known limitation
//!
//! When two rows share a category name, `prediction_distance_raw` keeps
//! only the last-seen distance. This mirrors the upstream behavior and is
//! documented rather than silently changed; see [`format_report`].
//!
//! ## Example
//!
//! ```
//! use report::{format_report, CategoryRow};
//!
//! let rows = vec![
//!     CategoryRow::new("testing", "unit test, coverage", 0.91, 0),
//!     CategoryRow::new("web", "http, server", 0.55, 1),
//! ];
//! let payload = format_report(&rows).unwrap();
//! assert_eq!(payload.winner, vec!["testing"]);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use thiserror::Error;

/// Errors produced while formatting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No rows were supplied; there is no winner tier to extract.
    #[error("cannot format a report from zero category rows")]
    EmptyRows,
    /// JSON serialization failed.
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One taxonomy category scored against one item.
///
/// A typed record replacing ad-hoc columnar access: each row carries the
/// category label, its keyword string, the raw similarity distance, and
/// the consolidated group id assigned to its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    /// Taxonomy category name.
    pub category: String,
    /// Keyword string the category was embedded from.
    pub keywords: String,
    /// Raw similarity distance for this category.
    pub distance: f64,
    /// Consolidated rank-group id; lower means more relevant.
    pub group: u32,
}

impl CategoryRow {
    pub fn new(
        category: impl Into<String>,
        keywords: impl Into<String>,
        distance: f64,
        group: u32,
    ) -> Self {
        Self {
            category: category.into(),
            keywords: keywords.into(),
            distance,
            group,
        }
    }
}

/// The output payload for one ranked item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankReport {
    /// Category names whose group equals the minimum group id present.
    pub winner: Vec<String>,
    /// Group id → ordered category names, insertion-ordered.
    pub prediction_cluster_raw: JsonMap<String, JsonValue>,
    /// Category name → raw distance. Last write wins on duplicate names.
    pub prediction_distance_raw: JsonMap<String, JsonValue>,
}

impl RankReport {
    /// Render the payload as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the output payload from rows sharing one consolidated grouping.
///
/// Rows must be in their original (descending-score) order; group lists
/// preserve that order. Duplicate category names overwrite each other in
/// `prediction_distance_raw` (last write wins) — an accepted upstream
/// limitation, not an error.
pub fn format_report(rows: &[CategoryRow]) -> Result<RankReport, ReportError> {
    let min_group = rows
        .iter()
        .map(|row| row.group)
        .min()
        .ok_or(ReportError::EmptyRows)?;

    let winner = rows
        .iter()
        .filter(|row| row.group == min_group)
        .map(|row| row.category.clone())
        .collect();

    let mut clusters: JsonMap<String, JsonValue> = JsonMap::new();
    let mut distances: JsonMap<String, JsonValue> = JsonMap::new();
    for row in rows {
        let entry = clusters
            .entry(row.group.to_string())
            .or_insert_with(|| JsonValue::Array(Vec::new()));
        if let JsonValue::Array(names) = entry {
            names.push(JsonValue::String(row.category.clone()));
        }
        distances.insert(row.category.clone(), JsonValue::from(row.distance));
    }

    Ok(RankReport {
        winner,
        prediction_cluster_raw: clusters,
        prediction_distance_raw: distances,
    })
}
