//! Valence modifier engine: per-token contextual valence adjustment.
//!
//! Consumes the token sequence plus lexicon lookups and produces one
//! [`ScoredToken`] per token. Tokens absent from the lexicon pass through
//! with zero valence; for lexicon hits the heuristics apply in a fixed
//! order: intensifier window scan, negation window scan, trailing-`!`
//! emphasis, ALL-CAPS emphasis, contrastive-conjunction reweighting.
//!
//! Every numeric constant below is part of the scoring contract. They are
//! deliberately not configurable at runtime: two processes given the same
//! lexicon must produce bit-identical scores.

use crate::lexicon::LexiconStore;
use crate::types::{ScoredToken, Token};

/// Number of preceding tokens scanned for intensifiers and negations.
pub const CONTEXT_WINDOW: usize = 3;

/// Multiplicative factor for a magnitude-raising intensifier ("very").
pub const SCALE_UP: f64 = 1.293;

/// Multiplicative factor for a magnitude-lowering intensifier ("slightly").
pub const SCALE_DOWN: f64 = 0.707;

/// Ceiling on valence magnitude after intensifier compounding. Matches the
/// upper bound of lexicon valences, so stacked intensifiers can never push
/// a word past the strongest possible lexicon entry.
pub const MAX_VALENCE: f64 = 4.0;

/// Negation flips the sign and multiplies magnitude by this factor;
/// "not good" is negative but weaker than "bad".
pub const NEGATION_DAMPENER: f64 = 0.74;

/// Magnitude added per trailing `!` in the token's sentence.
pub const EXCLAIM_BOOST: f64 = 0.292;

/// Cap on total trailing-`!` boost (four marks); further `!` are ignored.
pub const EXCLAIM_BOOST_CAP: f64 = 1.168;

/// Magnitude added, in the direction of the existing sign, for an
/// ALL-CAPS token.
pub const CAPS_BOOST: f64 = 0.733;

/// Weight applied to valences before a contrastive conjunction.
pub const BEFORE_BUT_WEIGHT: f64 = 0.5;

/// Weight applied to valences after a contrastive conjunction.
pub const AFTER_BUT_WEIGHT: f64 = 1.5;

/// Bare negation markers, in tokenizer-normalized form.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "cannot",
    "without", "hardly", "scarcely", "rarely", "seldom",
];

/// Apostrophe-stripped negated contractions; the tokenizer drops `'`, so
/// "isn't" reaches us as "isnt".
const NEGATED_CONTRACTIONS: &[&str] = &[
    "aint", "arent", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mustnt", "neednt", "shant", "shouldnt",
    "wasnt", "werent", "wont", "wouldnt",
];

/// Magnitude-raising intensifiers.
const UP_INTENSIFIERS: &[&str] = &[
    "absolutely", "amazingly", "completely", "especially", "exceptionally",
    "extremely", "hugely", "incredibly", "particularly", "really",
    "remarkably", "so", "substantially", "thoroughly", "totally",
    "tremendously", "truly", "unbelievably", "utterly", "very",
];

/// Magnitude-lowering intensifiers.
const DOWN_INTENSIFIERS: &[&str] = &[
    "almost", "barely", "marginally", "moderately", "partially", "slightly",
    "somewhat",
];

/// Two-word dampeners ("kind of nice", "sort of works").
const DOWN_BIGRAMS: &[(&str, &str)] = &[("kind", "of"), ("sort", "of")];

/// Contrastive conjunctions shifting weight toward the following clause.
const CONTRASTIVE_CONJUNCTIONS: &[&str] = &["but"];

/// Compute adjusted valences for the whole token sequence.
pub fn adjust(tokens: &[Token], lexicon: &LexiconStore) -> Vec<ScoredToken> {
    let exclaim_counts = sentence_exclaim_counts(tokens);
    let contrast_position = tokens
        .iter()
        .find(|t| CONTRASTIVE_CONJUNCTIONS.contains(&t.normalized.as_str()))
        .map(|t| t.position);

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let base = lexicon.lookup(&token.normalized).unwrap_or(0.0);
            let mut adjusted = base;
            if base != 0.0 {
                adjusted = apply_intensifiers(adjusted, i, tokens);
                adjusted = apply_negation(adjusted, i, tokens);
                adjusted = apply_exclaim_emphasis(adjusted, exclaim_counts[i]);
                adjusted = apply_caps_emphasis(adjusted, token);
                adjusted = apply_contrast_weight(adjusted, i, contrast_position);
            }
            ScoredToken {
                token: token.clone(),
                base_valence: base,
                adjusted_valence: adjusted,
            }
        })
        .collect()
}

/// Trailing-`!` count of the sentence each token belongs to.
///
/// A sentence ends at a token whose trailing punctuation contains `.`, `!`,
/// or `?`; the count is the number of `!` in that trailing run. Tokens of an
/// unterminated final sentence get zero.
fn sentence_exclaim_counts(tokens: &[Token]) -> Vec<usize> {
    let mut counts = vec![0usize; tokens.len()];
    let mut sentence_start = 0;
    for (i, token) in tokens.iter().enumerate() {
        let tail = token.trailing_punctuation();
        if tail.contains(['.', '!', '?']) {
            let exclaims = tail.chars().filter(|&c| c == '!').count();
            for count in &mut counts[sentence_start..=i] {
                *count = exclaims;
            }
            sentence_start = i + 1;
        }
    }
    counts
}

/// Preceding-window range for the token at `index`.
fn window(index: usize) -> std::ops::Range<usize> {
    index.saturating_sub(CONTEXT_WINDOW)..index
}

fn apply_intensifiers(valence: f64, index: usize, tokens: &[Token]) -> f64 {
    let mut scalar = 1.0;
    for j in window(index) {
        let word = tokens[j].normalized.as_str();
        if UP_INTENSIFIERS.contains(&word) {
            scalar *= SCALE_UP;
        } else if DOWN_INTENSIFIERS.contains(&word) {
            scalar *= SCALE_DOWN;
        } else if j + 1 < index {
            let next = tokens[j + 1].normalized.as_str();
            if DOWN_BIGRAMS.contains(&(word, next)) {
                scalar *= SCALE_DOWN;
            }
        }
    }
    (valence * scalar).clamp(-MAX_VALENCE, MAX_VALENCE)
}

fn apply_negation(valence: f64, index: usize, tokens: &[Token]) -> f64 {
    let negated = window(index).any(|j| is_negation(&tokens[j].normalized));
    if negated {
        -valence * NEGATION_DAMPENER
    } else {
        valence
    }
}

fn apply_exclaim_emphasis(valence: f64, exclaim_count: usize) -> f64 {
    let boost = (exclaim_count as f64 * EXCLAIM_BOOST).min(EXCLAIM_BOOST_CAP);
    if valence > 0.0 {
        valence + boost
    } else {
        valence - boost
    }
}

fn apply_caps_emphasis(valence: f64, token: &Token) -> f64 {
    if !token.is_all_caps {
        return valence;
    }
    if valence > 0.0 {
        valence + CAPS_BOOST
    } else {
        valence - CAPS_BOOST
    }
}

fn apply_contrast_weight(valence: f64, index: usize, contrast_position: Option<usize>) -> f64 {
    match contrast_position {
        Some(p) if index < p => valence * BEFORE_BUT_WEIGHT,
        Some(p) if index > p => valence * AFTER_BUT_WEIGHT,
        _ => valence,
    }
}

/// Whether a normalized word is a negation marker.
pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || NEGATED_CONTRACTIONS.contains(&word)
}
