//! Public types for the Polarity API.

mod scores;
mod token;

pub use scores::{Classification, Scores};
pub use token::{ScoredToken, Token};
