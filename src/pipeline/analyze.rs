// Analysis orchestration — wires one resume / job-description pair
// through every stage.
//
// Given the two raw documents, this module:
// 1. Rejects empty or whitespace-only input
// 2. Computes the TF-IDF cosine similarity score
// 3. Extracts both keyword sets and diffs them
// 4. Checks section presence (when enabled)
// 5. Counts over-long sentences
// 6. Builds the ordered suggestion list
// 7. Returns a complete MatchReport ready for rendering
//
// Nothing here persists: each call fits its own weighting model and drops
// it at return.

use std::fmt;

use tracing::info;

use crate::analysis::quality::long_sentence_count;
use crate::analysis::sections::check_sections;
use crate::analysis::suggest::build_suggestions;
use crate::report::{MatchBand, MatchReport};
use crate::scoring::gap::missing_keywords;
use crate::scoring::similarity::match_score;
use crate::text::traits::KeywordExtractor;

/// Knobs for one analysis call.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Max missing keywords to report
    pub missing_cap: usize,
    /// Whether to run the section presence checklist
    pub check_sections: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            missing_cap: 10,
            check_sections: true,
        }
    }
}

/// Rejected input — analysis was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    EmptyResume,
    EmptyJob,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyResume => {
                write!(f, "the resume text is empty, nothing to analyze")
            }
            InputError::EmptyJob => {
                write!(f, "the job description text is empty, nothing to analyze")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Run one full analysis.
///
/// This is the engine's entry point. Empty input is a user-facing warning
/// (`InputError`), not a crash; every other degenerate state resolves into
/// a defined field of the returned report.
pub fn analyze(
    resume: &str,
    job: &str,
    extractor: &dyn KeywordExtractor,
    options: &AnalysisOptions,
) -> Result<MatchReport, InputError> {
    if resume.trim().is_empty() {
        return Err(InputError::EmptyResume);
    }
    if job.trim().is_empty() {
        return Err(InputError::EmptyJob);
    }

    // Step 1: similarity score (fresh TF-IDF fit per pair)
    let score = match_score(resume, job);
    let band = MatchBand::from_score(score.value);

    // Step 2: keyword gap
    let resume_keywords = extractor.extract(resume);
    let job_keywords = extractor.extract(job);
    let missing = missing_keywords(&resume_keywords, &job_keywords, options.missing_cap);

    // Step 3: section presence (optional feature)
    let sections = options.check_sections.then(|| check_sections(resume));

    // Step 4: quality signal
    let long_sentences = long_sentence_count(resume);

    // Step 5: suggestions
    let suggestions = build_suggestions(score.value, sections.as_ref(), &missing);

    info!(
        score = format!("{:.1}", score.value),
        band = band.as_str(),
        empty_vocabulary = score.empty_vocabulary,
        missing = missing.len(),
        long_sentences,
        "Analyzed resume against job description"
    );

    Ok(MatchReport {
        similarity_score: score.value,
        empty_vocabulary: score.empty_vocabulary,
        match_band: band.to_string(),
        missing_keywords: missing,
        sections,
        long_sentences,
        suggestions,
        analyzed_at: chrono::Utc::now().to_rfc3339(),
    })
}
