//! Text normalization shared by the similarity algorithms.

use std::collections::BTreeSet;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Applies the edge policy every algorithm shares, then runs `score`.
///
/// - Equal after lowercasing (including two empty strings) scores 1.0.
/// - Exactly one empty string scores 0.0.
/// - Whatever `score` returns is clamped into `[0, 1]`; NaN becomes 0.0.
pub(crate) fn guarded(a: &str, b: &str, score: impl FnOnce(&str, &str) -> f64) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b || a.to_lowercase() == b.to_lowercase() {
        return 1.0;
    }
    clamp_unit(score(a, b))
}

/// Clamps a raw score into `[0, 1]`, mapping NaN to zero.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub(crate) fn lower_chars(raw: &str) -> Vec<char> {
    raw.to_lowercase().chars().collect()
}

pub(crate) fn char_len(raw: &str) -> usize {
    raw.chars().count()
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Lowercases and replaces every non-word character with a space.
pub(crate) fn word_chars_only(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|ch| if is_word_char(ch) { ch } else { ' ' })
        .collect()
}

/// Splits on non-word boundaries and lowercases; empty tokens are dropped.
pub fn tokenize(raw: &str) -> Vec<String> {
    word_chars_only(raw)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub(crate) fn token_set(raw: &str) -> BTreeSet<String> {
    tokenize(raw).into_iter().collect()
}

/// Canonical decomposition with combining marks removed ("Café" -> "Cafe").
pub fn strip_diacritics(raw: &str) -> String {
    raw.nfd().filter(|ch| !is_combining_mark(*ch)).collect()
}

/// Ratio `|a ∩ b| / |a ∪ b|`, or 0.0 when both sets are empty.
pub(crate) fn set_jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_punctuation_and_lowercases() {
        assert_eq!(tokenize("Smith, J.  (Jr)"), vec!["smith", "j", "jr"]);
        assert!(tokenize("--- ...").is_empty());
    }

    #[test]
    fn tokenize_keeps_non_ascii_letters() {
        assert_eq!(tokenize("Zürich-Nord"), vec!["zürich", "nord"]);
    }

    #[test]
    fn strip_diacritics_removes_marks_only() {
        assert_eq!(strip_diacritics("Crème Brûlée"), "Creme Brulee");
        assert_eq!(strip_diacritics("plain"), "plain");
    }

    #[test]
    fn guarded_applies_edge_policy_before_scoring() {
        let never = |_: &str, _: &str| -> f64 { panic!("must not be called") };
        assert_eq!(guarded("", "", never), 1.0);
        assert_eq!(guarded("", "abc", never), 0.0);
        assert_eq!(guarded("ABC", "abc", never), 1.0);
        assert_eq!(guarded("a", "b", |_, _| 7.5), 1.0);
        assert_eq!(guarded("a", "b", |_, _| f64::NAN), 0.0);
    }
}
