// Ranked keyword extraction via TF-IDF salience.
//
// Uses the `keyword_extraction` crate to keep only the most distinctive
// terms of a document instead of its full vocabulary. Useful on long
// resumes where the whitespace extractor drowns the gap analysis in
// filler words.
//
// IDF needs a corpus, but a resume is a single string, so the document is
// split into sentence-sized pseudo-documents first. Words that appear in
// every sentence get downweighted; words distinctive to certain sentences
// get boosted.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};

use super::keywords::KeywordSet;
use super::traits::KeywordExtractor;

/// Salience-ranked extractor — keeps the top N TF-IDF terms.
pub struct RankedExtractor {
    /// How many ranked keywords to keep
    pub top_n: usize,
}

impl Default for RankedExtractor {
    fn default() -> Self {
        Self { top_n: 25 }
    }
}

impl KeywordExtractor for RankedExtractor {
    fn extract(&self, text: &str) -> KeywordSet {
        let documents = split_into_documents(text);
        if documents.is_empty() {
            return KeywordSet::new();
        }

        let stop_words: Vec<String> = get(LANGUAGE::English);

        // The library handles tokenization, stop word removal, and scoring.
        let params = TfIdfParams::UnprocessedDocuments(&documents, &stop_words, None);
        let tfidf = TfIdf::new(params);

        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(self.top_n);

        ranked
            .into_iter()
            .map(|(word, _)| word.to_lowercase())
            .filter(|word| !word.is_empty())
            .collect()
    }
}

/// Split a document into sentence-sized pseudo-documents for IDF.
fn split_into_documents(text: &str) -> Vec<String> {
    text.split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
