//! Item references, fetched metadata, and the metadata-source contract.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a metadata source can surface.
///
/// Retry and backoff policy belongs to the source implementation; by the
/// time an error reaches this layer it is final. Variants map onto the
/// upstream failure classes real clients see (missing item, throttling,
/// server-side failure) so callers can handle them distinctly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The reference could not be parsed into an item.
    #[error("invalid item reference: {0}")]
    InvalidReference(String),
    /// The item does not exist upstream.
    #[error("item not found: {item}")]
    NotFound { item: String },
    /// The upstream refused the request due to throttling or permissions.
    #[error("metadata request rate-limited or forbidden for {item}")]
    RateLimited { item: String },
    /// Any other upstream failure, carrying the final status observed.
    #[error("upstream error {status} while fetching {item}")]
    Upstream { status: u16, item: String },
}

/// Reference to a scorable item: a hosted source repository or a package
/// on an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemRef {
    Repository { owner: String, name: String },
    Package { name: String },
}

impl ItemRef {
    /// Parse a repository URL of the form `https://host/owner/repo`,
    /// tolerating a trailing slash.
    pub fn from_repo_url(url: &str) -> Result<Self, MetadataError> {
        let trimmed = url.trim_end_matches('/');
        let mut parts = trimmed.rsplit('/');
        let name = parts.next().unwrap_or_default();
        let owner = parts.next().unwrap_or_default();
        if name.is_empty() || owner.is_empty() || owner.contains(':') {
            return Err(MetadataError::InvalidReference(format!(
                "expected a URL ending in /owner/repo, got {url:?}"
            )));
        }
        Ok(ItemRef::Repository {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Reference a package by its index name.
    pub fn package(name: impl Into<String>) -> Self {
        ItemRef::Package { name: name.into() }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Repository { owner, name } => write!(f, "{owner}/{name}"),
            ItemRef::Package { name } => write!(f, "{name}"),
        }
    }
}

/// Descriptive metadata for one item, merged across source kinds.
///
/// Repository sources fill `description` from the README and `topics` from
/// the hosting API; package sources additionally carry the index keywords
/// and the short summary line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Long-form description text, already cleaned of badges and markup.
    pub description: String,
    /// Topic labels attached to the item.
    pub topics: Vec<String>,
    /// Comma-separated keyword string, when the source provides one.
    #[serde(default)]
    pub keywords: Option<String>,
    /// One-line summary, when the source provides one.
    #[serde(default)]
    pub summary: Option<String>,
    /// When the metadata was fetched.
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
}

/// A collaborator that fetches descriptive metadata for an item.
///
/// Implementations wrap a hosting or package-index API and own their
/// transport concerns (auth, retries, timeouts). This crate only defines
/// the shape of what they must produce.
pub trait MetadataSource {
    fn fetch(&self, item: &ItemRef) -> Result<ItemMetadata, MetadataError>;
}
