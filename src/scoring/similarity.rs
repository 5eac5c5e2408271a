// Cosine similarity between the two documents' TF-IDF weight vectors,
// scaled to a 0-100 percentage.
//
// The degenerate case is guarded, not computed: a document that is empty
// after stop-word filtering gives the vectorizer no vocabulary to fit, so
// the score short-circuits to 0.0 with `empty_vocabulary` set instead of
// ever reaching the weighting step.

use std::collections::{BTreeMap, BTreeSet};

use super::tfidf::{english_stop_words, informative_terms, tfidf_weights};

/// The outcome of a similarity computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScore {
    /// 0.0 to 100.0
    pub value: f64,
    /// True when one or both documents had no informative terms and the
    /// score was short-circuited to 0.0
    pub empty_vocabulary: bool,
}

/// Score a resume against a job description.
///
/// Builds a fresh two-document TF-IDF fit, computes the cosine between the
/// two weight vectors, and scales to 0-100. The fit is dropped at return;
/// every pair of documents has its own vocabulary.
pub fn match_score(resume: &str, job: &str) -> SimilarityScore {
    let stop_words = english_stop_words();

    let resume_terms = informative_terms(resume, &stop_words);
    let job_terms = informative_terms(job, &stop_words);

    if resume_terms.is_empty() || job_terms.is_empty() {
        return SimilarityScore {
            value: 0.0,
            empty_vocabulary: true,
        };
    }

    let (resume_weights, job_weights) = tfidf_weights(&resume_terms, &job_terms);
    let cosine = cosine_from_weights(&resume_weights, &job_weights);

    SimilarityScore {
        value: (cosine * 100.0).clamp(0.0, 100.0),
        empty_vocabulary: false,
    }
}

/// Compute the cosine similarity between two term-weight maps.
///
/// Returns a value from 0.0 (orthogonal) to 1.0 (same direction). A zero
/// magnitude on either side returns 0.0.
pub fn cosine_from_weights(
    weights_a: &BTreeMap<String, f64>,
    weights_b: &BTreeMap<String, f64>,
) -> f64 {
    let all_keys: BTreeSet<&String> = weights_a.keys().chain(weights_b.keys()).collect();

    if all_keys.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;

    for key in all_keys {
        let a = weights_a.get(key).copied().unwrap_or(0.0);
        let b = weights_b.get(key).copied().unwrap_or(0.0);
        dot += a * b;
        mag_a += a * a;
        mag_b += b * b;
    }

    let denominator = mag_a.sqrt() * mag_b.sqrt();
    if denominator < f64::EPSILON {
        return 0.0;
    }

    (dot / denominator).clamp(0.0, 1.0)
}
