//! Character-level heuristics modelled on lightweight fuzzy-search libraries.

use std::collections::{BTreeMap, BTreeSet};

use crate::text::{guarded, strip_diacritics};

const MICRO_OVERLAP_WEIGHT: f64 = 0.7;
const MICRO_POSITION_WEIGHT: f64 = 0.3;

/// Position-aligned character overlap with extra weight for early positions.
pub fn microfuzz(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let s1: Vec<char> = a.trim().to_lowercase().chars().collect();
        let s2: Vec<char> = b.trim().to_lowercase().chars().collect();
        if s1 == s2 {
            return 1.0;
        }
        if s1.is_empty() || s2.is_empty() {
            return 0.0;
        }
        let max_len = s1.len().max(s2.len()) as f64;
        let min_len = s1.len().min(s2.len());

        let mut matches = 0usize;
        let mut position_bonus = 0.0;
        for (i, (x, y)) in s1.iter().zip(s2.iter()).enumerate() {
            if x == y {
                matches += 1;
                position_bonus += (max_len - i as f64) / max_len;
            }
        }

        let overlap = matches as f64 / max_len;
        let positional = position_bonus / min_len as f64;
        overlap * MICRO_OVERLAP_WEIGHT + positional * MICRO_POSITION_WEIGHT
    })
}

const UFUZZY_CONTAINMENT_SCORE: f64 = 0.8;

fn char_counts(raw: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for ch in raw.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Diacritic-insensitive blend: the best of exact match, containment (0.8) and
/// multiset character overlap.
pub fn ufuzzy(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let norm1 = strip_diacritics(a).to_lowercase();
        let norm2 = strip_diacritics(b).to_lowercase();
        if norm1 == norm2 {
            return 1.0;
        }
        if norm1.is_empty() || norm2.is_empty() {
            return 0.0;
        }
        let containment = if norm1.contains(&norm2) || norm2.contains(&norm1) {
            UFUZZY_CONTAINMENT_SCORE
        } else {
            0.0
        };

        let counts1 = char_counts(&norm1);
        let counts2 = char_counts(&norm2);
        let all: BTreeSet<char> = counts1.keys().chain(counts2.keys()).copied().collect();
        let mut common = 0usize;
        let mut total = 0usize;
        for ch in all {
            let c1 = counts1.get(&ch).copied().unwrap_or(0);
            let c2 = counts2.get(&ch).copied().unwrap_or(0);
            common += c1.min(c2);
            total += c1.max(c2);
        }
        let overlap = if total == 0 {
            0.0
        } else {
            common as f64 / total as f64
        };
        containment.max(overlap)
    })
}

const FUZZYJS_CONSECUTIVE_BONUS: f64 = 0.5;
const FUZZYJS_START_WEIGHT: f64 = 0.3;

/// Ordered subsequence scan of pattern `a` through text `b`.
///
/// Every pattern character must be found in order, otherwise the score is 0.
/// Runs of consecutive hits and hits that stay aligned with the start of the
/// text earn bonuses; the result is capped at 1.0.
pub fn fuzzyjs(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let pattern: Vec<char> = a.to_lowercase().chars().collect();
        let text: Vec<char> = b.to_lowercase().chars().collect();
        if pattern.is_empty() {
            return 0.0;
        }

        let mut score = 0.0;
        let mut pattern_idx = 0usize;
        let mut consecutive = 0usize;
        let mut start_bonus = 0usize;

        for (text_idx, ch) in text.iter().enumerate() {
            if pattern_idx == pattern.len() {
                break;
            }
            if pattern[pattern_idx] == *ch {
                score += 1.0;
                if consecutive > 0 {
                    score += consecutive as f64 * FUZZYJS_CONSECUTIVE_BONUS;
                }
                consecutive += 1;
                if text_idx == pattern_idx {
                    start_bonus += 1;
                }
                pattern_idx += 1;
            } else {
                consecutive = 0;
            }
        }

        if pattern_idx < pattern.len() {
            return 0.0;
        }
        let len = pattern.len() as f64;
        (score / len + start_bonus as f64 / len * FUZZYJS_START_WEIGHT).min(1.0)
    })
}
