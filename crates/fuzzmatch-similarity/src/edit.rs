//! Edit-distance family: the shared Levenshtein primitive and the scorers
//! built directly on it.

use rapidfuzz::distance::levenshtein;

use crate::text::{char_len, guarded};

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `a` into `b`, counted over Unicode scalar values. Case-sensitive.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// `(maxLen - distance) / maxLen` for two already-normalized strings.
pub(crate) fn edit_ratio(a: &str, b: &str) -> f64 {
    let max_len = char_len(a).max(char_len(b));
    if max_len == 0 {
        return 1.0;
    }
    let distance = edit_distance(a, b);
    (max_len - distance.min(max_len)) as f64 / max_len as f64
}

/// Classic Levenshtein similarity, case-insensitive.
pub fn levenshtein(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| edit_ratio(&a.to_lowercase(), &b.to_lowercase()))
}

const FUZZYSEARCH_MAX_DISTANCE: usize = 2;

/// Substring containment ratio, falling back to a bounded edit distance.
///
/// When one string contains the other the score is `shorter / longer`;
/// otherwise pairs within two edits score by edit ratio and the rest score 0.
pub fn fuzzysearch(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        let (len_a, len_b) = (char_len(&a), char_len(&b));
        let max_len = len_a.max(len_b);
        if a.contains(&b) || b.contains(&a) {
            return len_a.min(len_b) as f64 / max_len as f64;
        }
        let distance = edit_distance(&a, &b);
        if distance <= FUZZYSEARCH_MAX_DISTANCE {
            (max_len - distance) as f64 / max_len as f64
        } else {
            0.0
        }
    })
}
