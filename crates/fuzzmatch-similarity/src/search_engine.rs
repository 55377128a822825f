//! Scorers that approximate the relevance rules of full-text search engines.

use crate::edit::edit_distance;
use crate::text::{char_len, guarded, strip_diacritics, tokenize};

fn analyze(raw: &str) -> Vec<String> {
    tokenize(&strip_diacritics(raw))
}

const MEILI_PREFIX_WEIGHT: f64 = 0.9;
const MEILI_TYPO_CREDIT: f64 = 0.8;
const MEILI_MAX_TYPOS: usize = 2;
const MEILI_MAX_TYPO_RATIO: f64 = 0.3;

fn typo_tolerant(word1: &str, word2: &str) -> bool {
    let (len1, len2) = (char_len(word1), char_len(word2));
    if len1 <= 3 || len2 <= 3 {
        return false;
    }
    let distance = edit_distance(word1, word2);
    distance <= MEILI_MAX_TYPOS && distance as f64 / len1.max(len2) as f64 <= MEILI_MAX_TYPO_RATIO
}

/// Typo-tolerant matching: whole-string prefix first, then per-word credit.
pub fn meilisearch(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let words1 = analyze(a);
        let words2 = analyze(b);
        let norm1 = words1.join(" ");
        let norm2 = words2.join(" ");
        if norm1 == norm2 {
            return 1.0;
        }
        if norm1.is_empty() || norm2.is_empty() {
            return 0.0;
        }
        if norm1.starts_with(&norm2) || norm2.starts_with(&norm1) {
            let (len1, len2) = (char_len(&norm1), char_len(&norm2));
            return MEILI_PREFIX_WEIGHT * len1.min(len2) as f64 / len1.max(len2) as f64;
        }

        let mut credit = 0.0;
        for word1 in &words1 {
            for word2 in &words2 {
                if word1 == word2 {
                    credit += 1.0;
                    break;
                }
                if typo_tolerant(word1, word2) {
                    credit += MEILI_TYPO_CREDIT;
                    break;
                }
            }
        }
        credit / words1.len().max(words2.len()) as f64
    })
}

const ES_PREFIX_MIN_LEN: usize = 2;
const ES_PREFIX_MIN_RATIO: f64 = 0.4;
const ES_PREFIX_BOOST: f64 = 0.8;
const ES_FUZZY_MIN_LEN: usize = 3;
const ES_FUZZY_MIN_RATIO: f64 = 0.5;
const ES_FUZZY_BOOST: f64 = 0.7;
const ES_MIN_COVERAGE: f64 = 0.3;

#[derive(Debug, Default)]
struct TokenHits {
    exact: f64,
    prefix: f64,
    fuzzy: f64,
}

impl TokenHits {
    fn matched(&self) -> bool {
        self.exact > 0.0 || self.prefix > 0.0 || self.fuzzy > 0.0
    }
}

fn score_token(token: &str, candidates: &[String]) -> TokenHits {
    let mut hits = TokenHits::default();
    let len1 = char_len(token);
    for candidate in candidates {
        if token == candidate.as_str() {
            hits.exact = 1.0;
            break;
        }
        let len2 = char_len(candidate);
        let max_len = len1.max(len2);

        if len1 >= ES_PREFIX_MIN_LEN
            && len2 >= ES_PREFIX_MIN_LEN
            && (candidate.starts_with(token) || token.starts_with(candidate.as_str()))
        {
            let ratio = len1.min(len2) as f64 / max_len as f64;
            if ratio >= ES_PREFIX_MIN_RATIO {
                hits.prefix = hits.prefix.max(ratio * ES_PREFIX_BOOST);
            }
        }

        if len1 >= ES_FUZZY_MIN_LEN && len2 >= ES_FUZZY_MIN_LEN {
            let distance = edit_distance(token, candidate);
            let allowed = (max_len / 4).max(1);
            if distance <= allowed {
                let ratio = (max_len - distance) as f64 / max_len as f64;
                if ratio > ES_FUZZY_MIN_RATIO {
                    hits.fuzzy = hits.fuzzy.max(ratio * ES_FUZZY_BOOST);
                }
            }
        }
    }
    hits
}

/// Analyzer-style token scoring with exact, prefix and fuzzy facets, scaled by
/// how many source tokens found any counterpart.
pub fn elasticsearch(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let tokens1 = analyze(a);
        let tokens2 = analyze(b);
        match (tokens1.is_empty(), tokens2.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }

        let max_tokens = tokens1.len().max(tokens2.len()) as f64;
        let mut matched = 0usize;
        let (mut exact, mut prefix, mut fuzzy) = (0.0, 0.0, 0.0);
        for token in &tokens1 {
            let hits = score_token(token, &tokens2);
            if hits.matched() {
                matched += 1;
                exact += hits.exact;
                prefix += hits.prefix;
                fuzzy += hits.fuzzy;
            }
        }

        let coverage = matched as f64 / max_tokens;
        if coverage < ES_MIN_COVERAGE {
            return 0.0;
        }
        let raw = (exact + prefix * 0.8 + fuzzy * 0.6) / max_tokens;
        (raw * coverage).min(1.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn meilisearch_ignores_accents_and_punctuation() {
        assert_eq!(meilisearch("Café-Bar", "cafe bar"), 1.0);
    }

    #[test]
    fn meilisearch_scores_prefix_by_length_ratio() {
        // "acme" is a prefix of "acme corp": 0.9 * 4 / 9
        approx(meilisearch("Acme", "Acme Corp"), 0.4);
    }

    #[test]
    fn meilisearch_tolerates_typos_in_long_words() {
        // "international" ~ "internatonal" (1 edit), "business" exact; 1.8 / 2
        approx(
            meilisearch("international business", "internatonal business"),
            0.9,
        );
        // short words get no typo tolerance
        assert_eq!(meilisearch("cat", "cut"), 0.0);
    }

    #[test]
    fn elasticsearch_counts_exact_tokens() {
        // two of three tokens exact: (2 / 3) * (2 / 3)
        approx(
            elasticsearch("acme holdings ltd", "acme holdings inc"),
            4.0 / 9.0,
        );
    }

    #[test]
    fn elasticsearch_prefix_boundary_is_inclusive() {
        // "ab" vs "abcde": ratio exactly 0.4 counts as a prefix hit
        approx(elasticsearch("ab", "abcde"), 0.4 * 0.8 * 0.8);
    }

    #[test]
    fn elasticsearch_requires_token_coverage() {
        // one of four tokens matched: coverage 0.25 < 0.3
        assert_eq!(elasticsearch("alpha bravo charlie delta", "alpha x y z"), 0.0);
    }

    #[test]
    fn elasticsearch_punctuation_only_inputs_are_equal() {
        assert_eq!(elasticsearch("!!!", "???"), 1.0);
        assert_eq!(elasticsearch("!!!", "acme"), 0.0);
    }
}
