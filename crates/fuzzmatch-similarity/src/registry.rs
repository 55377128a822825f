//! Lookup table from algorithm id to descriptor and scorer.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use fuzzmatch_model::{AlgorithmCategory, AlgorithmDescriptor, MatchWarning, PerformanceTier};

use crate::{character, edit, jaro, phonetic, search_engine, token};

/// Id used when a requested algorithm is not registered.
pub const DEFAULT_ALGORITHM: &str = "levenshtein";

/// Plain function signature shared by every built-in scorer.
pub type SimilarityFn = fn(&str, &str) -> f64;

/// A scorer mapping two strings to a similarity in `[0, 1]`.
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// One catalogue entry.
#[derive(Clone)]
pub struct RegisteredAlgorithm {
    descriptor: AlgorithmDescriptor,
    scorer: Arc<dyn Similarity>,
}

impl RegisteredAlgorithm {
    pub fn new(descriptor: AlgorithmDescriptor, scorer: Arc<dyn Similarity>) -> Self {
        Self { descriptor, scorer }
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    pub fn scorer(&self) -> &dyn Similarity {
        self.scorer.as_ref()
    }

    /// Runs the scorer without any post-processing.
    pub fn score(&self, a: &str, b: &str) -> f64 {
        self.scorer.similarity(a, b)
    }
}

impl fmt::Debug for RegisteredAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredAlgorithm")
            .field("id", &self.descriptor.id)
            .finish_non_exhaustive()
    }
}

/// Result of [`AlgorithmRegistry::resolve`].
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    pub algorithm: &'a RegisteredAlgorithm,
    /// Set when the requested id was unknown and the default was used instead.
    pub fallback: Option<MatchWarning>,
}

impl Resolution<'_> {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Ordered algorithm catalogue.
///
/// Ids are stored lowercased; lookups trim and lowercase the requested id.
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
    entries: Vec<RegisteredAlgorithm>,
    index: BTreeMap<String, usize>,
    default: RegisteredAlgorithm,
}

fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

struct Builtin {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    best_for: &'static str,
    category: AlgorithmCategory,
    performance: PerformanceTier,
    scorer: SimilarityFn,
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        id: "levenshtein",
        name: "Levenshtein Distance",
        description: "Minimum single-character edits (insertions, deletions, substitutions)",
        best_for: "Spelling corrections, character-level typos",
        category: AlgorithmCategory::Basic,
        performance: PerformanceTier::Fast,
        scorer: edit::levenshtein,
    },
    Builtin {
        id: "jaro-winkler",
        name: "Jaro-Winkler Distance",
        description: "Character agreement with extra weight for a shared prefix",
        best_for: "Names, short strings, prefixes",
        category: AlgorithmCategory::Basic,
        performance: PerformanceTier::Fast,
        scorer: jaro::jaro_winkler,
    },
    Builtin {
        id: "soundex",
        name: "Soundex",
        description: "Phonetic codes based on how words sound in English",
        best_for: "Names, surnames, phonetic similarity",
        category: AlgorithmCategory::Basic,
        performance: PerformanceTier::Fast,
        scorer: phonetic::soundex,
    },
    Builtin {
        id: "cosine",
        name: "Cosine Similarity",
        description: "Vector similarity over term frequencies",
        best_for: "Descriptions, longer text",
        category: AlgorithmCategory::Basic,
        performance: PerformanceTier::Medium,
        scorer: token::cosine,
    },
    Builtin {
        id: "jaccard",
        name: "Jaccard Similarity",
        description: "Shared words over all distinct words",
        best_for: "Categorical data, tags, keywords",
        category: AlgorithmCategory::Basic,
        performance: PerformanceTier::Fast,
        scorer: token::jaccard,
    },
    Builtin {
        id: "flexsearch",
        name: "FlexSearch",
        description: "Word overlap blended with character bigram overlap",
        best_for: "Large datasets, auto-complete",
        category: AlgorithmCategory::Advanced,
        performance: PerformanceTier::Fast,
        scorer: token::flexsearch,
    },
    Builtin {
        id: "microfuzz",
        name: "MicroFuzz",
        description: "Aligned character overlap favouring early positions",
        best_for: "Small datasets, real-time matching",
        category: AlgorithmCategory::Advanced,
        performance: PerformanceTier::Fast,
        scorer: character::microfuzz,
    },
    Builtin {
        id: "ufuzzy",
        name: "uFuzzy",
        description: "Accent-insensitive containment and character overlap",
        best_for: "International text, multilingual data",
        category: AlgorithmCategory::Advanced,
        performance: PerformanceTier::Fast,
        scorer: character::ufuzzy,
    },
    Builtin {
        id: "fuzzysearch",
        name: "FuzzySearch",
        description: "Substring containment with a small edit-distance allowance",
        best_for: "Substring matching, quick searches",
        category: AlgorithmCategory::Advanced,
        performance: PerformanceTier::Fast,
        scorer: edit::fuzzysearch,
    },
    Builtin {
        id: "fuzzysort",
        name: "FuzzySort",
        description: "Scored with Levenshtein similarity",
        best_for: "Autocomplete, interactive search",
        category: AlgorithmCategory::Advanced,
        performance: PerformanceTier::Fast,
        scorer: edit::levenshtein,
    },
    Builtin {
        id: "fast-fuzzy",
        name: "Fast-Fuzzy",
        description: "Scored with Levenshtein similarity",
        best_for: "Performance-critical matching",
        category: AlgorithmCategory::Advanced,
        performance: PerformanceTier::Fast,
        scorer: edit::levenshtein,
    },
    Builtin {
        id: "fuse",
        name: "Fuse",
        description: "Scored with Levenshtein similarity",
        best_for: "General purpose matching",
        category: AlgorithmCategory::Basic,
        performance: PerformanceTier::Medium,
        scorer: edit::levenshtein,
    },
    Builtin {
        id: "fuzzyjs",
        name: "Fuzzy.js",
        description: "Ordered subsequence scan with run and start bonuses",
        best_for: "Abbreviations, interactive search",
        category: AlgorithmCategory::Advanced,
        performance: PerformanceTier::Medium,
        scorer: character::fuzzyjs,
    },
    Builtin {
        id: "minisearch",
        name: "MiniSearch",
        description: "Per-word exact, prefix and fuzzy credit",
        best_for: "Small to medium datasets, multi-word values",
        category: AlgorithmCategory::Advanced,
        performance: PerformanceTier::Medium,
        scorer: token::minisearch,
    },
    Builtin {
        id: "meilisearch",
        name: "Meilisearch (Simulated)",
        description: "Prefix matching with typo-tolerant word credit",
        best_for: "Product names, catalogue entries",
        category: AlgorithmCategory::SearchEngine,
        performance: PerformanceTier::Medium,
        scorer: search_engine::meilisearch,
    },
    Builtin {
        id: "elasticsearch",
        name: "Elasticsearch (Simulated)",
        description: "Analyzed tokens scored by exact, prefix and fuzzy facets",
        best_for: "Multi-word records, enterprise data",
        category: AlgorithmCategory::SearchEngine,
        performance: PerformanceTier::Slow,
        scorer: search_engine::elasticsearch,
    },
];

impl Builtin {
    fn register(&self) -> RegisteredAlgorithm {
        let descriptor = AlgorithmDescriptor::new(self.id, self.name, self.category, self.performance)
            .with_description(self.description)
            .with_best_for(self.best_for);
        RegisteredAlgorithm::new(descriptor, Arc::new(self.scorer))
    }
}

impl AlgorithmRegistry {
    /// Every built-in algorithm in catalogue order.
    pub fn builtin() -> Self {
        let entries: Vec<RegisteredAlgorithm> = BUILTINS.iter().map(Builtin::register).collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.id().to_string(), position))
            .collect();
        let default = entries
            .iter()
            .find(|entry| entry.id() == DEFAULT_ALGORITHM)
            .cloned()
            .unwrap_or_else(|| {
                RegisteredAlgorithm::new(
                    AlgorithmDescriptor::new(
                        DEFAULT_ALGORITHM,
                        "Levenshtein Distance",
                        AlgorithmCategory::Basic,
                        PerformanceTier::Fast,
                    ),
                    Arc::new(edit::levenshtein as SimilarityFn),
                )
            });
        Self {
            entries,
            index,
            default,
        }
    }

    /// Adds a custom algorithm, replacing any entry with the same id.
    pub fn register(&mut self, mut descriptor: AlgorithmDescriptor, scorer: Arc<dyn Similarity>) {
        descriptor.id = normalize_id(&descriptor.id);
        let entry = RegisteredAlgorithm::new(descriptor, scorer);
        if entry.id() == DEFAULT_ALGORITHM {
            self.default = entry.clone();
        }
        match self.index.get(entry.id()) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.id().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&RegisteredAlgorithm> {
        self.index
            .get(&normalize_id(id))
            .and_then(|&position| self.entries.get(position))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Looks up `id`, falling back to [`DEFAULT_ALGORITHM`] with a warning.
    pub fn resolve(&self, id: &str) -> Resolution<'_> {
        match self.get(id) {
            Some(algorithm) => Resolution {
                algorithm,
                fallback: None,
            },
            None => Resolution {
                algorithm: &self.default,
                fallback: Some(MatchWarning::UnknownAlgorithm {
                    requested: id.to_string(),
                    fallback: DEFAULT_ALGORITHM.to_string(),
                }),
            },
        }
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.entries.iter().map(RegisteredAlgorithm::descriptor)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(RegisteredAlgorithm::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
