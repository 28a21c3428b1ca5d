//! Embedding boundary: the provider contract, a deterministic stub for
//! tests and demos, and cosine similarity over produced vectors.
//!
//! Real deployments implement [`Embedder`] over an embedding service and
//! own that service's transport and retry concerns. The grouping core only
//! ever sees the final similarity scores.

use fxhash::hash64;
use thiserror::Error;

/// Errors an embedding provider can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// The provider cannot embed empty text.
    #[error("cannot embed empty text")]
    EmptyText,
    /// The two vectors cannot be compared.
    #[error("vector dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    /// Any provider-side failure, already final (no retries here).
    #[error("embedding provider failed: {0}")]
    Provider(String),
}

/// A collaborator that turns text into an embedding vector.
pub trait Embedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// Deterministic stand-in embedder.
///
/// Generates sinusoid values seeded by a hash of the input text, so equal
/// text always yields an identical, unit-length vector with no model
/// assets and no network. Useful for integration tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct StubEmbedder {
    /// Output dimensionality.
    pub dim: usize,
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self { dim: 512 }
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        if text.trim().is_empty() {
            return Err(EmbedError::EmptyText);
        }
        let seed = hash64(text.as_bytes());
        let mut vector = vec![0f32; self.dim];
        for (idx, value) in vector.iter_mut().enumerate() {
            *value = ((seed.rotate_left((idx % 64) as u32) as f32) * 1e-4).sin();
        }
        l2_normalize_in_place(&mut vector);
        Ok(vector)
    }
}

/// Normalize a vector to unit length in place; zero vectors are left as is.
pub fn l2_normalize_in_place(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(left: &[f32], right: &[f32]) -> Result<f32, EmbedError> {
    if left.len() != right.len() {
        return Err(EmbedError::DimensionMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    let dot: f32 = left.iter().zip(right).map(|(l, r)| l * r).sum();
    let norm_l: f32 = left.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_r: f32 = right.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm_l == 0.0 || norm_r == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_l * norm_r))
}
