//! Token budgets for embedding inputs.
//!
//! Embedding services cap input length in model tokens. The budget is a
//! trait so deployments can plug in the exact tokenizer of their embedding
//! model; the provided implementation approximates tokens with whitespace
//! words, which is conservative for prose-heavy README text.

/// Default budget, matching the common embedding-service input cap.
pub const DEFAULT_TOKEN_BUDGET: usize = 8000;

/// Trims text to at most `max_tokens` tokens.
pub trait TokenBudget {
    /// Count tokens in `text`.
    fn count(&self, text: &str) -> usize;

    /// Return `text` unchanged when within budget, otherwise a prefix of
    /// at most `max_tokens` tokens.
    fn trim(&self, text: &str, max_tokens: usize) -> String;
}

/// Whitespace-word approximation of a model tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenBudget;

impl TokenBudget for WhitespaceTokenBudget {
    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    fn trim(&self, text: &str, max_tokens: usize) -> String {
        if self.count(text) <= max_tokens {
            return text.to_string();
        }
        text.split_whitespace()
            .take(max_tokens)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
