//! Polarity - deterministic lexicon-and-heuristics sentiment scoring
//!
//! This crate assigns a polarity score to a span of UTF-8 text using a
//! lexicon of word valences plus contextual heuristics: negation scope,
//! intensifier boosters, punctuation and capitalization emphasis, and
//! contrastive-conjunction reweighting. No trained model, no network calls,
//! no hidden state; the same text always produces the same scores.
//!
//! # Example
//!
//! ```rust
//! use polarity::{Analyzer, Classification};
//!
//! fn main() -> polarity::Result<()> {
//!     let analyzer = Analyzer::embedded()?;
//!
//!     let scores = analyzer.analyze("I love this amazing product!");
//!     assert_eq!(scores.classification(), Classification::Positive);
//!
//!     println!(
//!         "compound {:.4} (pos {:.3} / neg {:.3} / neu {:.3})",
//!         scores.compound, scores.positive, scores.negative, scores.neutral,
//!     );
//!     Ok(())
//! }
//! ```
//!
//! The pipeline runs strictly tokenizer → modifier engine → aggregator →
//! classifier. Once the [`LexiconStore`] is loaded the whole computation is
//! pure and lock-free, so one [`Analyzer`] may serve any number of
//! concurrent callers; asynchrony, if any, belongs to the caller.

pub mod aggregate;
pub mod analyzer;
pub mod error;
pub mod lexicon;
pub mod modifier;
pub mod samples;
pub mod telemetry;
pub mod tokenizer;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use analyzer::Analyzer;
pub use error::{PolarityError, Result};
pub use lexicon::LexiconStore;
pub use samples::SAMPLE_TEXTS;
pub use tokenizer::tokenize;
pub use types::{Classification, ScoredToken, Scores, Token};
pub use version::PKG_VERSION;
