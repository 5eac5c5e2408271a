// Report types — the structs that flow out of the pipeline.
//
// These are separate from the pipeline so front ends (terminal, JSON
// consumers) can use them without depending on how they were computed.

use serde::{Deserialize, Serialize};

use crate::analysis::sections::SectionPresence;

/// The complete result of one resume / job-description analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Lexical similarity, 0.0 to 100.0
    pub similarity_score: f64,
    /// True when one or both documents had no informative terms and the
    /// score was short-circuited to 0.0
    pub empty_vocabulary: bool,
    /// Tier label derived from the score
    pub match_band: String,
    /// Job keywords absent from the resume — sorted, capped
    pub missing_keywords: Vec<String>,
    /// Section checklist, when the check was enabled
    pub sections: Option<SectionPresence>,
    /// How many sentences run past the readability threshold
    pub long_sentences: usize,
    /// Ordered improvement suggestions — never empty
    pub suggestions: Vec<String>,
    /// When the analysis ran (RFC 3339)
    pub analyzed_at: String,
}

/// Match tier thresholds over the similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    Poor,
    Weak,
    Moderate,
    Strong,
}

impl MatchBand {
    /// Determine the band from a similarity score (0-100).
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => MatchBand::Strong,
            s if s >= 60.0 => MatchBand::Moderate,
            s if s >= 40.0 => MatchBand::Weak,
            _ => MatchBand::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchBand::Poor => "Poor",
            MatchBand::Weak => "Weak",
            MatchBand::Moderate => "Moderate",
            MatchBand::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for MatchBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
