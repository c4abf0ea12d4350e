//! Token types for tokenization and scoring results.

use serde::{Deserialize, Serialize};

/// A single token from tokenization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Cleaned text of the token, punctuation preserved (e.g. `"great!!"`).
    pub text: String,
    /// Lowercased alphanumeric content used for lexicon lookup.
    pub normalized: String,
    /// Whether the token is an ALL-CAPS emphasis candidate: at least two
    /// alphabetic characters, all of them uppercase.
    pub is_all_caps: bool,
    /// Index of this token in the output sequence.
    pub position: usize,
}

impl Token {
    /// Create a new token, deriving `normalized` and `is_all_caps` from the
    /// cleaned text.
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        let normalized: String = text
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect::<String>()
            .to_lowercase();
        let alphabetic: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
        let is_all_caps = alphabetic.len() >= 2 && alphabetic.iter().all(|c| c.is_uppercase());
        Self {
            text,
            normalized,
            is_all_caps,
            position,
        }
    }

    /// The trailing punctuation run of the token (`"it!!?"` → `"!!?"`).
    pub fn trailing_punctuation(&self) -> &str {
        let end = self
            .text
            .rfind(|c: char| c.is_alphanumeric() || c == '_')
            .map(|i| i + self.text[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        &self.text[end..]
    }
}

/// A token paired with its lexicon valence and the context-adjusted valence
/// produced by the modifier engine. Ephemeral, one per analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredToken {
    pub token: Token,
    /// Raw lexicon valence, 0.0 for words not in the lexicon.
    pub base_valence: f64,
    /// Valence after negation, intensifier, emphasis, and clause weighting.
    pub adjusted_valence: f64,
}
