// Keyword extraction — unique token sets from normalized text.

use std::collections::HashSet;

use super::normalize::{normalize, normalize_permissive};

/// A set of distinct tokens extracted from a document. Insertion order is
/// irrelevant; everything that reaches user-facing output is sorted first.
pub type KeywordSet = HashSet<String>;

/// Extract the unique keyword set from raw text: normalize, split on
/// whitespace runs, drop empty tokens, collapse duplicates.
///
/// Empty text yields an empty set, never an error.
pub fn extract_keywords(text: &str) -> KeywordSet {
    tokenize(&normalize(text))
}

/// Permissive-variant extraction — same split, but digits and underscores
/// survive normalization.
pub fn extract_keywords_permissive(text: &str) -> KeywordSet {
    tokenize(&normalize_permissive(text))
}

fn tokenize(normalized: &str) -> KeywordSet {
    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
