// Improvement suggestions — a fixed-order rule list.
//
// Each rule appends at most one canned string when its condition holds.
// The order is part of the contract: front ends render the list as-is, and
// reordering it would shuffle output between runs of the same inputs.

use super::sections::SectionPresence;

/// Below this similarity score, the resume needs more job-specific terms.
pub const LOW_SCORE_THRESHOLD: f64 = 60.0;

/// Build the ordered suggestion list for a report.
///
/// `sections` is `None` when the section check was disabled; the two
/// section rules are skipped entirely in that case rather than treated as
/// missing. Never returns an empty vec: when no rule fires, the single
/// positive message takes its place.
pub fn build_suggestions(
    score: f64,
    sections: Option<&SectionPresence>,
    missing: &[String],
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if score < LOW_SCORE_THRESHOLD {
        suggestions.push("Add more job-specific skills and keywords.".to_string());
    }

    if let Some(sections) = sections {
        if !sections.skills {
            suggestions.push("Add a dedicated Skills section.".to_string());
        }
        if !sections.education {
            suggestions.push("Mention your Education details clearly.".to_string());
        }
    }

    if !missing.is_empty() {
        suggestions.push("Include missing skills relevant to the job description.".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push("Your resume is well-optimized for this role.".to_string());
    }

    suggestions
}
