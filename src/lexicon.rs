//! Lexicon store: the immutable word → valence table driving all scoring.
//!
//! Loaded once at startup from a line-oriented TSV resource
//! (`word<TAB>valence`, optional extra metadata columns ignored) and
//! read-only thereafter. The store is `Send + Sync` and can be shared across
//! any number of concurrent callers without synchronization.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{PolarityError, Result};

/// The lexicon bundled with the crate.
const EMBEDDED_LEXICON: &str = include_str!("../data/lexicon.txt");

/// Immutable mapping from normalized (lowercase) word to base valence.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    entries: HashMap<String, f64>,
}

impl LexiconStore {
    /// Load the lexicon bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_LEXICON, "embedded")
    }

    /// Load a lexicon from a TSV file at `path`.
    ///
    /// Fails with [`PolarityError::LexiconUnreadable`] if the file is missing
    /// or unreadable, [`PolarityError::LexiconMalformed`] on the first line
    /// that is not `word<TAB>valence`, and [`PolarityError::LexiconEmpty`] if
    /// no entries remain after parsing.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| {
            PolarityError::LexiconUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&raw, &path.display().to_string())
    }

    /// Parse lexicon text. Blank lines are skipped; anything else must be
    /// `word<TAB>valence` with optional further tab-separated columns, which
    /// are ignored (the upstream VADER-style lexicon carries stddev and
    /// per-rater columns this engine does not use).
    fn parse(raw: &str, source: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        for (idx, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or("").trim();
            let valence = fields.next().and_then(|v| v.trim().parse::<f64>().ok());
            match (word.is_empty(), valence) {
                (false, Some(valence)) => {
                    entries.insert(word.to_lowercase(), valence);
                }
                _ => {
                    return Err(PolarityError::LexiconMalformed {
                        line: idx + 1,
                        content: line.to_string(),
                    });
                }
            }
        }
        if entries.is_empty() {
            return Err(PolarityError::LexiconEmpty);
        }
        debug!(source, entries = entries.len(), "lexicon loaded");
        metrics::gauge!(crate::telemetry::LEXICON_ENTRIES).set(entries.len() as f64);
        Ok(Self { entries })
    }

    /// Look up the base valence for a word, case-insensitively.
    ///
    /// Absence is not an error: unknown words contribute neutral (zero)
    /// valence and callers treat `None` accordingly.
    pub fn lookup(&self, word: &str) -> Option<f64> {
        if word.is_empty() {
            return None;
        }
        // Most queries arrive already lowercased from the tokenizer; only
        // allocate when a caller passes mixed case.
        if word.chars().any(|c| c.is_uppercase()) {
            self.entries.get(&word.to_lowercase()).copied()
        } else {
            self.entries.get(word).copied()
        }
    }

    /// Number of entries in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon holds no entries (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
