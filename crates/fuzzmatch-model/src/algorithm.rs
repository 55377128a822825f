//! Static metadata describing the available similarity algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Grouping used when presenting the algorithm catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmCategory {
    /// Classic edit-distance, phonetic and set measures.
    Basic,
    /// Heuristics modelled on popular fuzzy-search libraries.
    Advanced,
    /// Heuristics modelled on full-text search engines.
    SearchEngine,
}

impl AlgorithmCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmCategory::Basic => "basic",
            AlgorithmCategory::Advanced => "advanced",
            AlgorithmCategory::SearchEngine => "search-engine",
        }
    }
}

impl fmt::Display for AlgorithmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlgorithmCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "basic" => Ok(AlgorithmCategory::Basic),
            "advanced" => Ok(AlgorithmCategory::Advanced),
            "search-engine" | "search engine" => Ok(AlgorithmCategory::SearchEngine),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}

/// Relative cost of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Fast,
    Medium,
    Slow,
}

impl PerformanceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceTier::Fast => "fast",
            PerformanceTier::Medium => "medium",
            PerformanceTier::Slow => "slow",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PerformanceTier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(PerformanceTier::Fast),
            "medium" => Ok(PerformanceTier::Medium),
            "slow" => Ok(PerformanceTier::Slow),
            _ => Err(ModelError::UnknownPerformance(s.to_string())),
        }
    }
}

/// Reference data for one algorithm in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmDescriptor {
    /// Stable identifier used to select the algorithm (e.g. "jaro-winkler").
    pub id: String,
    /// Human-readable name.
    pub display_name: String,
    /// One-line description of the method.
    pub description: String,
    /// Kind of data the algorithm suits best.
    pub best_for: String,
    pub category: AlgorithmCategory,
    pub performance: PerformanceTier,
}

impl AlgorithmDescriptor {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: AlgorithmCategory,
        performance: PerformanceTier,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: String::new(),
            best_for: String::new(),
            category,
            performance,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_best_for(mut self, best_for: impl Into<String>) -> Self {
        self.best_for = best_for.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_display() {
        for category in [
            AlgorithmCategory::Basic,
            AlgorithmCategory::Advanced,
            AlgorithmCategory::SearchEngine,
        ] {
            assert_eq!(category.to_string().parse::<AlgorithmCategory>(), Ok(category));
        }
        assert!("exotic".parse::<AlgorithmCategory>().is_err());
    }

    #[test]
    fn performance_parses_case_insensitively() {
        assert_eq!("SLOW".parse::<PerformanceTier>(), Ok(PerformanceTier::Slow));
    }
}
