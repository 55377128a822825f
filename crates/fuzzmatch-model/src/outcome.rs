use serde::{Deserialize, Serialize};

use crate::item::StringItem;

/// One accepted source/target pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub source: String,
    pub target: String,
    /// Similarity in `[0, 1]` under `algorithm`.
    pub score: f64,
    /// Identifier the caller asked for (aliases are reported as requested).
    pub algorithm: String,
    pub source_row: usize,
    pub target_row: usize,
}

/// A recovered problem that did not abort the matching request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchWarning {
    /// The requested identifier is not registered; `fallback` was used instead.
    UnknownAlgorithm { requested: String, fallback: String },
    /// Scoring one pair failed and the pair was treated as a score of zero.
    ScoringFailed {
        source_row: usize,
        target_row: usize,
        reason: String,
    },
}

impl MatchWarning {
    pub fn message(&self) -> String {
        match self {
            Self::UnknownAlgorithm { requested, fallback } => {
                format!("unknown algorithm '{requested}', using '{fallback}'")
            }
            Self::ScoringFailed {
                source_row,
                target_row,
                reason,
            } => format!("scoring failed for source row {source_row} / target row {target_row}: {reason}"),
        }
    }
}

/// Partition of both inputs into matched pairs and leftovers.
///
/// Every non-blank source index appears either in exactly one match or in
/// `unmatched_sources`; the same holds for targets, and no target index is
/// claimed by more than one match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingOutcome {
    /// Identifier of the algorithm that actually scored the pairs.
    pub algorithm: String,
    /// Accepted matches in source order.
    pub matches: Vec<MatchRecord>,
    pub unmatched_sources: Vec<StringItem>,
    pub unmatched_targets: Vec<StringItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MatchWarning>,
}

impl MatchingOutcome {
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Number of source items the outcome accounts for.
    pub fn source_count(&self) -> usize {
        self.matches.len() + self.unmatched_sources.len()
    }

    /// Number of target items the outcome accounts for.
    pub fn target_count(&self) -> usize {
        self.matches.len() + self.unmatched_targets.len()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns true if any scoring failure was recovered during the run.
    pub fn has_scoring_failures(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, MatchWarning::ScoringFailed { .. }))
    }
}
