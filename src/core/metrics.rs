//! Text metrics - word, character and token counts for LLM context budgeting
//!
//! Exact token counts use tiktoken's cl100k_base encoding (GPT-4). When the
//! encoding cannot be loaded the exact count is simply left out; the
//! `characters / 4` estimate is always present.

use once_cell::sync::Lazy;
use tiktoken_rs::{cl100k_base, CoreBPE};

use crate::core::model::Metrics;

/// Name of the encoding used for exact counts
pub const ENCODING_NAME: &str = "cl100k_base";

// Loaded once on first use
static CL100K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| cl100k_base().map_err(|e| format!("Failed to load cl100k_base: {}", e)));

/// Computes `Metrics` for text, with or without an exact tokenizer
#[derive(Clone, Copy)]
pub struct TokenCounter {
    bpe: Option<&'static CoreBPE>,
}

impl TokenCounter {
    /// Use the exact tokenizer when it loads, otherwise estimate
    pub fn detect() -> Self {
        Self {
            bpe: CL100K_BPE.as_ref().ok(),
        }
    }

    /// Never use the exact tokenizer
    pub fn estimate_only() -> Self {
        Self { bpe: None }
    }

    /// Whether exact token counts will be reported
    pub fn has_tokenizer(&self) -> bool {
        self.bpe.is_some()
    }

    /// Exact token count; `None` for empty text or without a tokenizer
    pub fn count_gpt_tokens(&self, text: &str) -> Option<usize> {
        if text.is_empty() {
            return None;
        }
        self.bpe
            .map(|bpe| bpe.encode_with_special_tokens(text).len())
    }

    /// All metrics for `text`
    pub fn count_all(&self, text: &str) -> Metrics {
        Metrics {
            words: count_words(text),
            characters: count_characters(text),
            characters_no_spaces: count_characters_no_spaces(text),
            estimated_gpt_tokens: estimate_tokens(text),
            gpt_tokens: self.count_gpt_tokens(text),
        }
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::detect()
    }
}

impl std::fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCounter")
            .field("exact", &self.has_tokenizer())
            .finish()
    }
}

/// Whitespace-delimited words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Unicode scalar values
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Unicode scalar values that are not whitespace
pub fn count_characters_no_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Rough token estimate: one token per four characters
pub fn estimate_tokens(text: &str) -> usize {
    count_characters(text) / 4
}
