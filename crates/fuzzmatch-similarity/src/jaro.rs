//! Jaro and Jaro-Winkler similarity.

use crate::text::{guarded, lower_chars};

/// Jaro similarity must reach this value before the prefix boost applies.
const WINKLER_BOOST_THRESHOLD: f64 = 0.7;
const WINKLER_PREFIX_WEIGHT: f64 = 0.1;
const WINKLER_MAX_PREFIX: usize = 4;

/// Plain Jaro similarity over two character slices.
///
/// The match window is `floor(max_len / 2) - 1`; when that is negative (both
/// strings have at most one character) only identical slices score above zero.
pub(crate) fn jaro_chars(s1: &[char], s2: &[char]) -> f64 {
    if s1 == s2 {
        return 1.0;
    }
    let (len1, len2) = (s1.len(), s2.len());
    let Some(window) = (len1.max(len2) / 2).checked_sub(1) else {
        return 0.0;
    };

    let mut s1_matched = vec![false; len1];
    let mut s2_matched = vec![false; len2];
    let mut matches = 0usize;

    for (i, ch) in s1.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len2);
        for j in start..end {
            if s2_matched[j] || *ch != s2[j] {
                continue;
            }
            s1_matched[i] = true;
            s2_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0usize;
    for (i, ch) in s1.iter().enumerate() {
        if !s1_matched[i] {
            continue;
        }
        while !s2_matched[k] {
            k += 1;
        }
        if *ch != s2[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let half_transpositions = transpositions as f64 / 2.0;
    (m / len1 as f64 + m / len2 as f64 + (m - half_transpositions) / m) / 3.0
}

/// Case-insensitive Jaro similarity.
pub fn jaro(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| jaro_chars(&lower_chars(a), &lower_chars(b)))
}

/// Jaro-Winkler similarity: Jaro plus a bonus for a shared prefix of up to four
/// characters, applied only once Jaro reaches 0.7.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let s1 = lower_chars(a);
        let s2 = lower_chars(b);
        let jaro = jaro_chars(&s1, &s2);
        if jaro < WINKLER_BOOST_THRESHOLD {
            return jaro;
        }
        let prefix = s1
            .iter()
            .zip(s2.iter())
            .take(WINKLER_MAX_PREFIX)
            .take_while(|(x, y)| x == y)
            .count();
        jaro + WINKLER_PREFIX_WEIGHT * prefix as f64 * (1.0 - jaro)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn jaro_reference_values() {
        approx(jaro("MARTHA", "MARHTA"), 0.944);
        approx(jaro("DIXON", "DICKSONX"), 0.767);
    }

    #[test]
    fn jaro_winkler_reference_values() {
        approx(jaro_winkler("MARTHA", "MARHTA"), 0.961);
        approx(jaro_winkler("DWAYNE", "DUANE"), 0.84);
        approx(jaro_winkler("DIXON", "DICKSONX"), 0.813);
    }

    #[test]
    fn single_characters_without_window_do_not_match() {
        assert_eq!(jaro("a", "b"), 0.0);
        assert_eq!(jaro_winkler("a", "A"), 1.0);
    }

    #[test]
    fn boost_skipped_below_threshold() {
        let s1 = lower_chars("abcxyzuvw");
        let s2 = lower_chars("abcqrstlm");
        let plain = jaro_chars(&s1, &s2);
        assert!(plain < WINKLER_BOOST_THRESHOLD);
        assert_eq!(jaro_winkler("abcxyzuvw", "abcqrstlm"), plain);
    }

    #[test]
    fn abbreviated_name_scores_high() {
        let score = jaro_winkler("John Smith", "J. Smith");
        assert!(score > 0.85, "got {score}");
    }
}
