//! # catrank Sources (`sources`)
//!
//! Boundary collaborators for the catrank pipeline: everything that lives
//! between external services and the pure grouping core.
//!
//! ## What lives here
//!
//! - **Item references and metadata** — [`ItemRef`], [`ItemMetadata`], and
//!   the [`MetadataSource`] trait. Real implementations wrap a hosting or
//!   package-index API and own their transport, auth, and retry policy;
//!   this crate defines only the contract and the typed failure surface.
//! - **Text cleanup** — [`strip_badges`], [`strip_markup`], and
//!   [`clean_text`] remove README badge lines and inline markup before
//!   embedding; badge lines are dense with CI vocabulary and skew
//!   test/quality categories otherwise.
//! - **Token budgets** — the [`TokenBudget`] trait with a whitespace-word
//!   approximation, for capping embedding inputs.
//! - **Embedding boundary** — the [`Embedder`] trait, a deterministic
//!   [`StubEmbedder`] for tests and demos, and [`cosine_similarity`].
//!
//! Nothing in this crate performs I/O.

mod embed;
mod filter;
mod trim;
mod types;

pub use crate::embed::{
    cosine_similarity, l2_normalize_in_place, EmbedError, Embedder, StubEmbedder,
};
pub use crate::filter::{clean_text, strip_badges, strip_markup};
pub use crate::trim::{TokenBudget, WhitespaceTokenBudget, DEFAULT_TOKEN_BUDGET};
pub use crate::types::{ItemMetadata, ItemRef, MetadataError, MetadataSource};
