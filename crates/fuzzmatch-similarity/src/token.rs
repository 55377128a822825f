//! Token and set based similarity measures.

use std::collections::{BTreeMap, BTreeSet};

use crate::edit::edit_ratio;
use crate::text::{char_len, guarded, set_jaccard, token_set, tokenize};

fn term_frequencies(tokens: &[String]) -> BTreeMap<&str, usize> {
    let mut tf = BTreeMap::new();
    for token in tokens {
        *tf.entry(token.as_str()).or_insert(0) += 1;
    }
    tf
}

/// Cosine of the term-frequency vectors of both strings.
pub fn cosine(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);
        match (tokens_a.is_empty(), tokens_b.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }
        let tf_a = term_frequencies(&tokens_a);
        let tf_b = term_frequencies(&tokens_b);
        let terms: BTreeSet<&str> = tf_a.keys().chain(tf_b.keys()).copied().collect();

        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;
        for term in terms {
            let fa = tf_a.get(term).copied().unwrap_or(0) as f64;
            let fb = tf_b.get(term).copied().unwrap_or(0) as f64;
            dot += fa * fb;
            norm_a += fa * fa;
            norm_b += fb * fb;
        }
        let magnitude = norm_a.sqrt() * norm_b.sqrt();
        if magnitude == 0.0 { 0.0 } else { dot / magnitude }
    })
}

/// Token-set intersection over union.
pub fn jaccard(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let set_a = token_set(a);
        let set_b = token_set(b);
        if set_a.is_empty() && set_b.is_empty() {
            return 1.0;
        }
        set_jaccard(&set_a, &set_b)
    })
}

const FLEX_TOKEN_WEIGHT: f64 = 0.7;
const FLEX_BIGRAM_WEIGHT: f64 = 0.3;

fn bigrams(raw: &str) -> BTreeSet<(char, char)> {
    let chars: Vec<char> = raw.to_lowercase().chars().collect();
    chars.windows(2).map(|pair| (pair[0], pair[1])).collect()
}

/// Blend of token-set Jaccard (70%) and character-bigram Jaccard (30%).
pub fn flexsearch(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let token_sim = set_jaccard(&token_set(a), &token_set(b));
        let bigram_sim = set_jaccard(&bigrams(a), &bigrams(b));
        token_sim * FLEX_TOKEN_WEIGHT + bigram_sim * FLEX_BIGRAM_WEIGHT
    })
}

const MINI_PREFIX_SCORE: f64 = 0.8;
const MINI_FUZZY_MIN_RATIO: f64 = 0.6;
const MINI_FUZZY_WEIGHT: f64 = 0.6;

fn mini_tokens(raw: &str) -> Vec<String> {
    tokenize(raw)
        .into_iter()
        .filter(|token| char_len(token) > 1)
        .collect()
}

fn mini_token_score(token: &str, candidates: &[String]) -> f64 {
    let mut best = 0.0f64;
    for candidate in candidates {
        if token == candidate.as_str() {
            return 1.0;
        }
        if candidate.starts_with(token) || token.starts_with(candidate.as_str()) {
            best = best.max(MINI_PREFIX_SCORE);
        }
        let ratio = edit_ratio(token, candidate);
        if ratio > MINI_FUZZY_MIN_RATIO {
            best = best.max(ratio * MINI_FUZZY_WEIGHT);
        }
    }
    best
}

/// Per-token best match (exact > prefix > fuzzy), averaged over the tokens of
/// `a`. Single-character tokens are ignored.
pub fn minisearch(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let tokens_a = mini_tokens(a);
        let tokens_b = mini_tokens(b);
        match (tokens_a.is_empty(), tokens_b.is_empty()) {
            (true, true) => return 1.0,
            (true, false) | (false, true) => return 0.0,
            (false, false) => {}
        }
        let total: f64 = tokens_a
            .iter()
            .map(|token| mini_token_score(token, &tokens_b))
            .sum();
        total / tokens_a.len() as f64
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
    fn cosine_uses_term_frequencies() {
        // [1,1] vs [2,1] over (new, york) -> 3 / (sqrt 2 * sqrt 5)
        approx(cosine("new york", "new new york"), 3.0 / (2f64.sqrt() * 5f64.sqrt()));
        assert_eq!(cosine("alpha", "beta"), 0.0);
    }

    #[test]
    fn cosine_handles_tokenless_input() {
        assert_eq!(cosine("!!!", "???"), 1.0);
        assert_eq!(cosine("!!!", "word"), 0.0);
    }

    #[test]
    fn jaccard_ignores_order_and_duplicates() {
        assert_eq!(jaccard("red green blue", "blue green red red"), 1.0);
        approx(jaccard("acme holdings ltd", "acme ltd"), 2.0 / 3.0);
    }

    #[test]
    fn flexsearch_blends_tokens_and_bigrams() {
        // tokens: {ab} vs {abc} -> 0; bigrams: {ab} vs {ab, bc} -> 0.5
        approx(flexsearch("ab", "abc"), 0.15);
    }

    #[test]
    fn minisearch_scores_prefix_tokens() {
        // "micro" is a prefix of "microsoft"; "corp" matches exactly
        approx(minisearch("Micro Corp", "Microsoft Corp"), 0.9);
    }

    #[test]
    fn minisearch_fuzzy_tokens_are_discounted() {
        // "colour" vs "color": ratio 5/6 weighted by 0.6
        approx(minisearch("colour", "color"), 0.5);
    }
}
