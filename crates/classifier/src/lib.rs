//! # catrank Classifier (`classifier`)
//!
//! ## Purpose
//!
//! `classifier` sits on top of the grouping core (`grouping`) and the
//! payload layer (`report`). It takes the final output of the embedding
//! boundary — taxonomy categories with cosine-similarity scores, sorted
//! descending — and produces the ranked report for one item: validate the
//! order contract, run density and gap grouping, consolidate, format.
//!
//! In a typical deployment you will:
//! - Fetch and clean item metadata, embed it, and score it against every
//!   taxonomy category (all outside this crate).
//! - Hand the sorted `(category, score)` list to [`Classifier::classify`]
//!   and serialize the returned [`report::RankReport`].
//!
//! ## Core Types
//!
//! - [`CategoryScore`]: one category with its similarity score.
//! - [`Classifier`]: the engine; holds a [`grouping::GroupingConfig`].
//! - [`ClassifyError`]: typed failure surface wrapping the grouping and
//!   report errors.
//!
//! ## Example
//!
//! ```
//! use classifier::{Classifier, CategoryScore};
//!
//! let engine = Classifier::with_defaults();
//! let report = engine
//!     .classify(&[
//!         CategoryScore::new("testing", "unit test, coverage", 0.91),
//!         CategoryScore::new("cli", "terminal, argument parsing", 0.90),
//!         CategoryScore::new("web", "http, server", 0.45),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(report.winner, vec!["testing", "cli"]);
//! ```
//!
//! Every classify call emits a structured tracing span with the chosen
//! strategy, group count, and elapsed time.

mod engine;
mod types;

pub use crate::engine::Classifier;
pub use crate::types::{CategoryScore, ClassifyError};
