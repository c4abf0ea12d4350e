//! Analyzer: the `analyze(text) -> Scores` facade over the pipeline.

use std::path::Path;
use std::time::Instant;

use tracing::trace;

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::lexicon::LexiconStore;
use crate::modifier::adjust;
use crate::telemetry;
use crate::tokenizer::tokenize;
use crate::types::Scores;

/// Sentiment analyzer over an immutable lexicon.
///
/// Construction loads the lexicon once; after that `analyze` is a pure,
/// synchronous computation with no I/O and no locks, so a single `Analyzer`
/// can be shared (`&self`, or behind an `Arc`) across any number of threads
/// or tasks without coordination. It never suspends and always completes in
/// time bounded by the input length; callers wanting a timeout enforce it
/// outside and discard a late result.
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: LexiconStore,
}

impl Analyzer {
    /// Create an analyzer over an already-loaded lexicon.
    pub fn new(lexicon: LexiconStore) -> Self {
        Self { lexicon }
    }

    /// Create an analyzer over the lexicon bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(LexiconStore::embedded()?))
    }

    /// Create an analyzer over a lexicon file at `path`.
    pub fn from_lexicon_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(LexiconStore::from_path(path)?))
    }

    /// The lexicon backing this analyzer.
    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    /// Score a span of text.
    ///
    /// Deterministic and infallible: empty, whitespace-only, or adversarial
    /// input degrades to a defined result (all-neutral for no tokens,
    /// zero-valence contributions for unrecognized words) rather than an
    /// error.
    pub fn analyze(&self, text: &str) -> Scores {
        let started = Instant::now();

        let tokens = tokenize(text);
        let scored = adjust(&tokens, &self.lexicon);
        let scores = aggregate(&scored);

        trace!(
            tokens = tokens.len(),
            compound = scores.compound,
            "analysis complete"
        );
        metrics::counter!(telemetry::ANALYSES_TOTAL).increment(1);
        metrics::counter!(telemetry::TOKENS_SCORED_TOTAL).increment(tokens.len() as u64);
        metrics::histogram!(telemetry::ANALYSIS_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());

        scores
    }
}
