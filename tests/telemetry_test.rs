//! Tests for metrics emission.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};

use polarity::{Analyzer, telemetry};

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

/// Sum all counter values matching a given metric name.
fn counter_total(snapshot: &SnapshotVec, name: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Check if any histogram entries exist for a given metric name.
fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

#[test]
fn analyze_records_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let analyzer = Analyzer::embedded().expect("bundled lexicon loads");
        analyzer.analyze("I like it");
        analyzer.analyze("terrible");
    });

    let snapshot = snapshotter.snapshot().into_vec();

    assert_eq!(counter_total(&snapshot, telemetry::ANALYSES_TOTAL), 2);
    // "I like it" has 3 tokens, "terrible" has 1.
    assert_eq!(counter_total(&snapshot, telemetry::TOKENS_SCORED_TOTAL), 4);
    assert!(
        has_histogram(&snapshot, telemetry::ANALYSIS_DURATION_SECONDS),
        "expected a duration histogram entry"
    );
}

#[test]
fn metrics_are_noops_without_a_recorder() {
    // Must not panic or alter results when no recorder is installed.
    let analyzer = Analyzer::embedded().expect("bundled lexicon loads");
    let scores = analyzer.analyze("fine");
    assert!(scores.compound > 0.0);
}
