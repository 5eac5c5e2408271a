// Section presence checks — does the resume have the parts recruiters
// expect to find?
//
// These run against the RAW text, not the normalized form: the email
// pattern needs the "@" and dots that normalization strips.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Which standard resume sections were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub email: bool,
    pub education: bool,
    pub skills: bool,
    pub experience: bool,
}

impl SectionPresence {
    /// Iterate the checklist as (label, present) pairs, in display order.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("Email", self.email),
            ("Education", self.education),
            ("Skills", self.skills),
            ("Experience", self.experience),
        ]
    }
}

/// Check a resume for an email address and the standard section markers.
///
/// The section probes are substring checks on the lowercased text:
/// "skill" intentionally also matches "skills" and "skillset". A regex
/// compile failure degrades to `email: false`; this function never fails.
pub fn check_sections(resume: &str) -> SectionPresence {
    let email = Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(resume))
        .unwrap_or(false);

    let lower = resume.to_lowercase();

    SectionPresence {
        email,
        education: lower.contains("education"),
        skills: lower.contains("skill"),
        experience: lower.contains("experience"),
    }
}
