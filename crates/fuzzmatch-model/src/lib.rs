//! Data model shared by the fuzzmatch crates.

pub mod algorithm;
pub mod error;
pub mod item;
pub mod outcome;
pub mod stats;

pub use algorithm::{AlgorithmCategory, AlgorithmDescriptor, PerformanceTier};
pub use error::{ModelError, Result};
pub use item::{StringItem, collect_items};
pub use outcome::{MatchRecord, MatchWarning, MatchingOutcome};
pub use stats::{MatchingStats, ScoreBand, ScoreDistribution};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands_use_inclusive_lower_bounds() {
        assert_eq!(ScoreBand::classify(0.9), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(0.899), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(0.7), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(0.5), ScoreBand::Fair);
        assert_eq!(ScoreBand::classify(0.49), ScoreBand::Poor);
    }

    #[test]
    fn outcome_serializes_with_tagged_warnings() {
        let outcome = MatchingOutcome {
            algorithm: "levenshtein".to_string(),
            matches: vec![MatchRecord {
                source: "Acme".to_string(),
                target: "ACME".to_string(),
                score: 1.0,
                algorithm: "levenshtein".to_string(),
                source_row: 0,
                target_row: 2,
            }],
            unmatched_sources: vec![],
            unmatched_targets: vec![StringItem::new("Other", 0).unwrap()],
            warnings: vec![MatchWarning::UnknownAlgorithm {
                requested: "fuzzy-magic".to_string(),
                fallback: "levenshtein".to_string(),
            }],
        };
        let json = serde_json::to_value(&outcome).expect("serialize outcome");
        assert_eq!(json["warnings"][0]["kind"], "unknown_algorithm");
        assert_eq!(json["unmatched_targets"][0]["row_index"], 0);

        let round: MatchingOutcome = serde_json::from_value(json).expect("deserialize outcome");
        assert_eq!(round.source_count(), 1);
        assert_eq!(round.target_count(), 2);
    }
}
