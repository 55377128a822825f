//! Progress events emitted while a matching request runs.

use fuzzmatch_model::{MatchRecord, StringItem};

/// One step of a matching run, borrowed from the engine's working state.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent<'a> {
    Started {
        algorithm: &'a str,
        sources: usize,
        targets: usize,
        threshold: f64,
        max_results: usize,
    },
    AlgorithmFallback {
        requested: &'a str,
        fallback: &'a str,
    },
    Matched {
        record: &'a MatchRecord,
    },
    /// The best available target scored below the threshold.
    NoMatch {
        source: &'a StringItem,
        best_score: f64,
    },
    ScoringFailed {
        source_row: usize,
        target_row: usize,
        reason: &'a str,
    },
    /// Every target was claimed while sources were still waiting.
    TargetsExhausted {
        remaining_sources: usize,
    },
    Finished {
        matches: usize,
        unmatched_sources: usize,
        unmatched_targets: usize,
        warnings: usize,
    },
}

/// Receives [`MatchEvent`]s from the engine.
pub trait MatchObserver: Send + Sync {
    fn on_event(&self, event: &MatchEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn on_event(&self, _event: &MatchEvent<'_>) {}
}

/// Forwards events to `tracing`, logging row indices and scores but no values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn on_event(&self, event: &MatchEvent<'_>) {
        match event {
            MatchEvent::Started {
                algorithm,
                sources,
                targets,
                threshold,
                max_results,
            } => tracing::info!(
                algorithm,
                sources,
                targets,
                threshold,
                max_results,
                "matching started"
            ),
            MatchEvent::AlgorithmFallback {
                requested,
                fallback,
            } => tracing::warn!(requested, fallback, "unknown algorithm, using fallback"),
            MatchEvent::Matched { record } => tracing::debug!(
                source_row = record.source_row,
                target_row = record.target_row,
                score = record.score,
                "matched"
            ),
            MatchEvent::NoMatch { source, best_score } => tracing::debug!(
                source_row = source.row_index(),
                best_score,
                "no target reached the threshold"
            ),
            MatchEvent::ScoringFailed {
                source_row,
                target_row,
                reason,
            } => tracing::warn!(source_row, target_row, reason, "scoring failed, pair skipped"),
            MatchEvent::TargetsExhausted { remaining_sources } => {
                tracing::debug!(remaining_sources, "all targets claimed");
            }
            MatchEvent::Finished {
                matches,
                unmatched_sources,
                unmatched_targets,
                warnings,
            } => tracing::info!(
                matches,
                unmatched_sources,
                unmatched_targets,
                warnings,
                "matching finished"
            ),
        }
    }
}
