//! Telemetry metric name constants.
//!
//! Centralised metric names for polarity operations. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `polarity_`. Counters end in `_total`,
//! histograms use meaningful units.

/// Total calls to `analyze`.
pub const ANALYSES_TOTAL: &str = "polarity_analyses_total";

/// Total tokens run through the modifier engine.
pub const TOKENS_SCORED_TOTAL: &str = "polarity_tokens_scored_total";

/// Wall-clock duration of a single analysis, in seconds.
pub const ANALYSIS_DURATION_SECONDS: &str = "polarity_analysis_duration_seconds";

/// Number of entries in the most recently loaded lexicon.
pub const LEXICON_ENTRIES: &str = "polarity_lexicon_entries";
