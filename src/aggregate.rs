//! Aggregator: folds adjusted valences into a single [`Scores`] value.

use crate::types::{ScoredToken, Scores};

/// Normalization constant for the compound curve. Controls how quickly the
/// compound score saturates toward ±1 as the valence sum grows.
pub const ALPHA: f64 = 15.0;

/// Offset added to each nonzero token's magnitude when computing the
/// positive/negative masses. Keeps the proportions well-defined alongside
/// the neutral token count and carries punctuation-only emphasis without
/// biasing zero-valence-heavy text toward either pole.
pub const PROPORTION_OFFSET: f64 = 1.0;

/// Aggregate scored tokens into normalized proportions plus a compound
/// score. An empty sequence yields the all-neutral result.
pub fn aggregate(scored: &[ScoredToken]) -> Scores {
    if scored.is_empty() {
        return Scores::neutral();
    }

    let sum: f64 = scored.iter().map(|s| s.adjusted_valence).sum();
    let compound = (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0);

    let mut positive_mass = 0.0;
    let mut negative_mass = 0.0;
    let mut neutral_mass = 0.0;
    for token in scored {
        let v = token.adjusted_valence;
        if v > 0.0 {
            positive_mass += v + PROPORTION_OFFSET;
        } else if v < 0.0 {
            negative_mass += v.abs() + PROPORTION_OFFSET;
        } else {
            neutral_mass += 1.0;
        }
    }

    let total = positive_mass + negative_mass + neutral_mass;
    if total == 0.0 {
        return Scores::neutral();
    }

    Scores {
        positive: positive_mass / total,
        negative: negative_mass / total,
        neutral: neutral_mass / total,
        compound,
    }
}
