//! Ranked lookup of one query against a candidate list.

use serde::{Deserialize, Serialize};

use fuzzmatch_model::collect_items;
use fuzzmatch_similarity::{Similarity, clamp_unit};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Candidates must score strictly above this to be listed.
pub const MIN_SEARCH_SCORE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub value: String,
    pub row_index: usize,
    pub score: f64,
}

/// Scores every non-blank candidate against `query` and returns the best
/// `limit` hits, highest first. Equal scores keep candidate order.
pub fn rank<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    scorer: &dyn Similarity,
    limit: usize,
) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = collect_items(candidates)
        .into_iter()
        .filter_map(|item| {
            let score = clamp_unit(scorer.similarity(query, item.value()));
            (score > MIN_SEARCH_SCORE).then(|| SearchHit {
                value: item.value().to_string(),
                row_index: item.row_index(),
                score,
            })
        })
        .collect();
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(limit);
    tracing::debug!(hits = hits.len(), limit, "search ranked");
    hits
}

#[cfg(test)]
mod tests {
    use fuzzmatch_similarity::levenshtein;

    use super::*;

    #[test]
    fn blank_query_returns_nothing() {
        assert!(rank("   ", &["a", "b"], &levenshtein, 10).is_empty());
    }

    #[test]
    fn hits_are_sorted_and_truncated() {
        let candidates = ["Globex", "Acme Corp", "", "Acme Co", "Acme Corp"];
        let hits = rank("acme corp", &candidates, &levenshtein, 2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].value, "Acme Corp");
        assert_eq!(hits[0].row_index, 1);
        assert_eq!(hits[1].row_index, 4);
    }

    #[test]
    fn low_scores_are_dropped() {
        let hits = rank("abc", &["xyz"], &levenshtein, DEFAULT_SEARCH_LIMIT);
        assert!(hits.is_empty());
    }
}
