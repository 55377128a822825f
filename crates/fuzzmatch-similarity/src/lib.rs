//! Normalized string similarity algorithms.
//!
//! Every scorer maps two strings to a value in `[0, 1]` and shares one edge
//! policy: strings equal after lowercasing score 1.0 (two empty strings
//! included) and exactly one empty string scores 0.0. The
//! [`AlgorithmRegistry`] maps algorithm ids to scorers.

pub mod character;
pub mod edit;
pub mod jaro;
pub mod phonetic;
pub mod registry;
pub mod search_engine;
mod text;
pub mod token;

pub use character::{fuzzyjs, microfuzz, ufuzzy};
pub use edit::{edit_distance, fuzzysearch, levenshtein};
pub use jaro::{jaro, jaro_winkler};
pub use phonetic::{soundex, soundex_code};
pub use registry::{
    AlgorithmRegistry, DEFAULT_ALGORITHM, RegisteredAlgorithm, Resolution, Similarity,
    SimilarityFn,
};
pub use search_engine::{elasticsearch, meilisearch};
pub use text::{clamp_unit, strip_diacritics, tokenize};
pub use token::{cosine, flexsearch, jaccard, minisearch};
