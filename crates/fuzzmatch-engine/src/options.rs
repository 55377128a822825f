//! Matching request configuration.

use serde::{Deserialize, Serialize};

use fuzzmatch_similarity::DEFAULT_ALGORITHM;

pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MAX_RESULTS: usize = 1000;

/// Options for one [`MatchEngine::run`](crate::MatchEngine::run) call.
///
/// Deserializes with per-field defaults, so `{}` is a valid request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Algorithm id; unknown ids fall back to levenshtein with a warning.
    pub algorithm: String,
    /// Minimum accepted score, inclusive.
    pub threshold: f64,
    /// Upper bound on the number of matches produced.
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.to_string(),
            threshold: DEFAULT_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl MatchOptions {
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let options: MatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, MatchOptions::default());
        assert_eq!(options.algorithm, "levenshtein");
        assert_eq!(options.threshold, 0.6);
        assert_eq!(options.max_results, 1000);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let options: MatchOptions =
            serde_json::from_str(r#"{"algorithm": "soundex", "threshold": 0.8}"#).unwrap();
        assert_eq!(options.algorithm, "soundex");
        assert_eq!(options.threshold, 0.8);
        assert_eq!(options.max_results, DEFAULT_MAX_RESULTS);
    }
}
