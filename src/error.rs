//! Polarity error types

use std::path::PathBuf;

/// Polarity error types.
///
/// All variants are construction-time lexicon failures. Scoring itself is
/// infallible: `analyze` degrades gracefully on empty, unrecognized, or
/// adversarial input instead of returning an error.
#[derive(Debug, thiserror::Error)]
pub enum PolarityError {
    #[error("lexicon unreadable at {path}: {source}")]
    LexiconUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank lexicon line that is not `word<TAB>valence[<TAB>...]`.
    #[error("malformed lexicon entry at line {line}: {content:?}")]
    LexiconMalformed { line: usize, content: String },

    #[error("lexicon contains no entries")]
    LexiconEmpty,
}

/// Result type alias for Polarity operations
pub type Result<T> = std::result::Result<T, PolarityError>;
