//! Greedy one-to-one matching.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use fuzzmatch_model::{MatchRecord, MatchWarning, MatchingOutcome, StringItem, collect_items};
use fuzzmatch_similarity::{AlgorithmRegistry, Similarity, clamp_unit};

use crate::error::{EngineError, Result};
use crate::observer::{MatchEvent, MatchObserver, TracingObserver};
use crate::options::MatchOptions;

/// Pairs source values with target values using one similarity algorithm.
///
/// Sources are visited in input order. Each source is scored against every
/// target that is still unclaimed; the highest score wins (ties go to the
/// earliest target) and is accepted when it reaches the threshold. Accepted
/// targets are claimed and never offered again, so the assignment is greedy
/// and depends on source order.
///
/// # Example
///
/// ```
/// use fuzzmatch_engine::{MatchEngine, MatchOptions};
///
/// let engine = MatchEngine::new();
/// let outcome = engine
///     .run(&["Acme Corp"], &["ACME Corp.", "Globex"], &MatchOptions::default())
///     .unwrap();
/// assert_eq!(outcome.matches[0].target, "ACME Corp.");
/// ```
#[derive(Clone)]
pub struct MatchEngine {
    registry: Arc<AlgorithmRegistry>,
    observer: Arc<dyn MatchObserver>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("algorithms", &self.registry.len())
            .finish_non_exhaustive()
    }
}

struct Best {
    position: usize,
    score: f64,
}

impl MatchEngine {
    /// Engine over the built-in algorithms, logging through `tracing`.
    pub fn new() -> Self {
        Self::with_registry(AlgorithmRegistry::builtin())
    }

    pub fn with_registry(registry: AlgorithmRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            observer: Arc::new(TracingObserver),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn MatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Matches `source` against `target`.
    ///
    /// Blank values are dropped before matching; the remaining values are
    /// trimmed and keep their original indices. Fails only when either side
    /// has no usable values or the threshold is NaN.
    pub fn run<S, T>(&self, source: &[S], target: &[T], options: &MatchOptions) -> Result<MatchingOutcome>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        if options.threshold.is_nan() {
            return Err(EngineError::InvalidThreshold(options.threshold));
        }
        let sources = collect_items(source);
        if sources.is_empty() {
            return Err(EngineError::EmptySource);
        }
        let targets = collect_items(target);
        if targets.is_empty() {
            return Err(EngineError::EmptyTarget);
        }

        let mut warnings = Vec::new();
        let resolution = self.registry.resolve(&options.algorithm);
        if let Some(warning) = resolution.fallback {
            if let MatchWarning::UnknownAlgorithm {
                requested,
                fallback,
            } = &warning
            {
                self.observer.on_event(&MatchEvent::AlgorithmFallback {
                    requested,
                    fallback,
                });
            }
            warnings.push(warning);
        }
        let algorithm = resolution.algorithm;
        let algorithm_id = algorithm.id().to_string();

        self.observer.on_event(&MatchEvent::Started {
            algorithm: &algorithm_id,
            sources: sources.len(),
            targets: targets.len(),
            threshold: options.threshold,
            max_results: options.max_results,
        });

        let mut claimed = vec![false; targets.len()];
        let mut available = targets.len();
        let mut matches = Vec::new();
        let mut unmatched_sources = Vec::new();
        let mut exhaustion_reported = false;
        let mut limit_reported = false;

        for (position, source_item) in sources.iter().enumerate() {
            if matches.len() >= options.max_results {
                if !limit_reported {
                    tracing::debug!(
                        max_results = options.max_results,
                        remaining_sources = sources.len() - position,
                        "match limit reached"
                    );
                    limit_reported = true;
                }
                unmatched_sources.push(source_item.clone());
                continue;
            }
            if available == 0 {
                if !exhaustion_reported {
                    self.observer.on_event(&MatchEvent::TargetsExhausted {
                        remaining_sources: sources.len() - position,
                    });
                    exhaustion_reported = true;
                }
                unmatched_sources.push(source_item.clone());
                continue;
            }

            let mut best: Option<Best> = None;
            for (target_position, target_item) in targets.iter().enumerate() {
                if claimed[target_position] {
                    continue;
                }
                let score =
                    self.score_pair(algorithm.scorer(), source_item, target_item, &mut warnings);
                if best.as_ref().is_none_or(|current| score > current.score) {
                    best = Some(Best {
                        position: target_position,
                        score,
                    });
                }
            }

            match best {
                Some(best) if best.score >= options.threshold => {
                    let target_item = &targets[best.position];
                    claimed[best.position] = true;
                    available -= 1;
                    let record = MatchRecord {
                        source: source_item.value().to_string(),
                        target: target_item.value().to_string(),
                        score: best.score,
                        algorithm: algorithm_id.clone(),
                        source_row: source_item.row_index(),
                        target_row: target_item.row_index(),
                    };
                    self.observer.on_event(&MatchEvent::Matched { record: &record });
                    matches.push(record);
                }
                Some(best) => {
                    self.observer.on_event(&MatchEvent::NoMatch {
                        source: source_item,
                        best_score: best.score,
                    });
                    unmatched_sources.push(source_item.clone());
                }
                None => unmatched_sources.push(source_item.clone()),
            }
        }

        let unmatched_targets: Vec<StringItem> = targets
            .into_iter()
            .zip(claimed)
            .filter_map(|(item, taken)| (!taken).then_some(item))
            .collect();

        self.observer.on_event(&MatchEvent::Finished {
            matches: matches.len(),
            unmatched_sources: unmatched_sources.len(),
            unmatched_targets: unmatched_targets.len(),
            warnings: warnings.len(),
        });

        Ok(MatchingOutcome {
            algorithm: algorithm_id,
            matches,
            unmatched_sources,
            unmatched_targets,
            warnings,
        })
    }

    /// Scores one pair, turning panics and non-finite results into a zero
    /// score plus a warning.
    fn score_pair(
        &self,
        scorer: &dyn Similarity,
        source: &StringItem,
        target: &StringItem,
        warnings: &mut Vec<MatchWarning>,
    ) -> f64 {
        let result = catch_unwind(AssertUnwindSafe(|| {
            scorer.similarity(source.value(), target.value())
        }));
        let reason = match result {
            Ok(score) if score.is_finite() => return clamp_unit(score),
            Ok(score) => format!("non-finite score {score}"),
            Err(payload) => panic_message(payload.as_ref()),
        };
        self.observer.on_event(&MatchEvent::ScoringFailed {
            source_row: source.row_index(),
            target_row: target.row_index(),
            reason: &reason,
        });
        warnings.push(MatchWarning::ScoringFailed {
            source_row: source.row_index(),
            target_row: target.row_index(),
            reason,
        });
        0.0
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("scorer panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("scorer panicked: {message}")
    } else {
        "scorer panicked".to_string()
    }
}

/// Runs `source` against `target` with a default [`MatchEngine`].
pub fn find_matches<S, T>(source: &[S], target: &[T], options: &MatchOptions) -> Result<MatchingOutcome>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    MatchEngine::new().run(source, target, options)
}
