// Two-document TF-IDF weighting for the similarity score.
//
// The corpus is exactly the pair under comparison: term frequency comes
// from one document, document frequency from both. The smoothed idf
// (ln((1 + n) / (1 + df)) + 1) never reaches zero, so a term shared by
// both documents still contributes to the cosine. With only two documents
// a plain idf would zero out every shared term and break the score
// entirely.
//
// Weight maps are BTreeMaps: iteration order is fixed, so float
// accumulation order is fixed, so the final score is exactly reproducible
// across runs.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use stop_words::{get, LANGUAGE};

use crate::text::normalize::normalize;

/// The English stop-word list used by the scorer, as a lookup set.
pub fn english_stop_words() -> HashSet<String> {
    get(LANGUAGE::English).into_iter().collect()
}

/// Tokenize a document into its informative terms: strict-normalized
/// tokens with stop words removed. Duplicates are kept; term frequency
/// needs them.
pub fn informative_terms(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|token| !stop_words.contains(*token))
        .map(str::to_string)
        .collect()
}

/// Build the TF-IDF weight map for each document of the pair.
///
/// Both maps share one vocabulary (the union of both term lists) so the
/// idf of every term is computed over the same two-document corpus.
pub fn tfidf_weights(
    resume_terms: &[String],
    job_terms: &[String],
) -> (BTreeMap<String, f64>, BTreeMap<String, f64>) {
    let resume_counts = term_counts(resume_terms);
    let job_counts = term_counts(job_terms);

    let vocabulary: BTreeSet<&String> = resume_counts.keys().chain(job_counts.keys()).collect();

    const N_DOCS: f64 = 2.0;

    let mut resume_weights = BTreeMap::new();
    let mut job_weights = BTreeMap::new();

    for term in vocabulary {
        let in_resume = resume_counts.contains_key(term);
        let in_job = job_counts.contains_key(term);
        let df = (in_resume as u32 + in_job as u32) as f64;
        let idf = ((1.0 + N_DOCS) / (1.0 + df)).ln() + 1.0;

        if let Some(&tf) = resume_counts.get(term) {
            resume_weights.insert(term.clone(), tf as f64 * idf);
        }
        if let Some(&tf) = job_counts.get(term) {
            job_weights.insert(term.clone(), tf as f64 * idf);
        }
    }

    (resume_weights, job_weights)
}

fn term_counts(terms: &[String]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for term in terms {
        *counts.entry(term.clone()).or_insert(0) += 1;
    }
    counts
}
