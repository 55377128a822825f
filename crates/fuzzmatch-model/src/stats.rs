use serde::{Deserialize, Serialize};

/// Quality band of a single match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Below 0.50.
    Poor,
    /// 0.50 to below 0.70.
    Fair,
    /// 0.70 to below 0.90.
    Good,
    /// 0.90 and above.
    Excellent,
}

impl ScoreBand {
    pub fn classify(score: f64) -> Self {
        if score >= 0.9 {
            Self::Excellent
        } else if score >= 0.7 {
            Self::Good
        } else if score >= 0.5 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (90%+)",
            Self::Good => "Good (70-89%)",
            Self::Fair => "Fair (50-69%)",
            Self::Poor => "Poor (<50%)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

impl ScoreDistribution {
    pub fn record(&mut self, score: f64) {
        match ScoreBand::classify(score) {
            ScoreBand::Excellent => self.excellent += 1,
            ScoreBand::Good => self.good += 1,
            ScoreBand::Fair => self.fair += 1,
            ScoreBand::Poor => self.poor += 1,
        }
    }

    pub fn count(&self, band: ScoreBand) -> usize {
        match band {
            ScoreBand::Excellent => self.excellent,
            ScoreBand::Good => self.good,
            ScoreBand::Fair => self.fair,
            ScoreBand::Poor => self.poor,
        }
    }

    pub fn total(&self) -> usize {
        self.excellent + self.good + self.fair + self.poor
    }
}

/// Aggregate figures for one matching run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingStats {
    pub total_matches: usize,
    pub total_sources: usize,
    /// Matches as a percentage of source items, rounded to two decimals.
    pub match_percentage: f64,
    /// Mean match score as a percentage, rounded to two decimals.
    pub average_score: f64,
    pub distribution: ScoreDistribution,
}
