//! Fixed sample texts for pre-populating consumer input.
//!
//! Consumers (CLI, UI) present these so a first-time user can exercise the
//! engine without typing anything.

/// Sample texts spanning clearly positive, clearly negative, and neutral
/// ground, plus intensifier and contrastive-conjunction cases.
pub const SAMPLE_TEXTS: &[&str] = &[
    "I love this amazing product! It works perfectly!",
    "This is the worst experience I've ever had.",
    "The weather is okay today.",
    "I'm so excited about this new opportunity!",
    "I hate waiting in long lines.",
    "The book was interesting but not exceptional.",
];
