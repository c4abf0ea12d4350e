//! Sentiment score types.
//!
//! `Scores` is the single value returned by analysis: three proportions that
//! sum to 1 plus a normalized compound score. `Classification` maps the
//! compound score onto a three-way label with fixed thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compound threshold at or above which text classifies as positive.
///
/// The negative threshold is the mirror image (`-POSITIVE_THRESHOLD`).
/// These are part of the scoring contract and are not configurable; callers
/// needing different cutoffs wrap the compound score themselves.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Result of a sentiment analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Positive proportion (0.0 to 1.0).
    pub positive: f64,
    /// Negative proportion (0.0 to 1.0).
    pub negative: f64,
    /// Neutral proportion (0.0 to 1.0).
    pub neutral: f64,
    /// Normalized overall polarity (-1.0 to 1.0).
    pub compound: f64,
}

impl Scores {
    /// The all-neutral result, returned for input with no scorable tokens.
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        }
    }

    /// Classify the compound score into a three-way label.
    pub fn classification(&self) -> Classification {
        Classification::from_compound(self.compound)
    }
}

/// Three-way sentiment label derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Compound score at or above `POSITIVE_THRESHOLD`.
    Positive,
    /// Compound score at or below `-POSITIVE_THRESHOLD`.
    Negative,
    /// Compound score strictly between the thresholds.
    Neutral,
}

impl Classification {
    /// Map a compound score onto a label using the fixed thresholds.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Classification::Positive
        } else if compound <= -POSITIVE_THRESHOLD {
            Classification::Negative
        } else {
            Classification::Neutral
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Positive => "POSITIVE",
            Classification::Negative => "NEGATIVE",
            Classification::Neutral => "NEUTRAL",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_scores_sum_to_one() {
        let scores = Scores::neutral();
        let total = scores.positive + scores.negative + scores.neutral;
        assert!((total - 1.0).abs() < 1e-6);
        assert_eq!(scores.compound, 0.0);
    }

    #[test]
    fn neutral_scores_classify_neutral() {
        assert_eq!(Scores::neutral().classification(), Classification::Neutral);
    }

    #[test]
    fn classification_at_positive_threshold() {
        assert_eq!(
            Classification::from_compound(0.05),
            Classification::Positive
        );
    }

    #[test]
    fn classification_just_below_positive_threshold() {
        assert_eq!(
            Classification::from_compound(0.049999),
            Classification::Neutral
        );
    }

    #[test]
    fn classification_at_negative_threshold() {
        assert_eq!(
            Classification::from_compound(-0.05),
            Classification::Negative
        );
    }

    #[test]
    fn classification_display_is_uppercase() {
        assert_eq!(Classification::Positive.to_string(), "POSITIVE");
        assert_eq!(Classification::Negative.to_string(), "NEGATIVE");
        assert_eq!(Classification::Neutral.to_string(), "NEUTRAL");
    }
}
