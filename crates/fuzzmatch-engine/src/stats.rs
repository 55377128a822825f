//! Aggregate statistics over accepted matches.

use fuzzmatch_model::{MatchRecord, MatchingStats, ScoreDistribution};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarizes `matches` relative to the number of source items considered.
///
/// Percentages are rounded to two decimals; with no matches every figure is
/// zero.
pub fn matching_stats(matches: &[MatchRecord], total_sources: usize) -> MatchingStats {
    let mut distribution = ScoreDistribution::default();
    for record in matches {
        distribution.record(record.score);
    }

    let total_matches = matches.len();
    let match_percentage = if total_sources == 0 {
        0.0
    } else {
        round2(total_matches as f64 / total_sources as f64 * 100.0)
    };
    let average_score = if total_matches == 0 {
        0.0
    } else {
        let sum: f64 = matches.iter().map(|record| record.score).sum();
        round2(sum / total_matches as f64 * 100.0)
    };

    MatchingStats {
        total_matches,
        total_sources,
        match_percentage,
        average_score,
        distribution,
    }
}
