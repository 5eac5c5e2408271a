// Keyword extractor trait — swap-ready abstraction.
//
// Lets the pipeline swap out how keywords are pulled from a document
// without changing the scoring or gap-analysis code. The default splits
// normalized text on whitespace; the ranked implementation in `ranked.rs`
// keeps only the most salient terms.

use super::keywords::{extract_keywords, extract_keywords_permissive, KeywordSet};

/// Trait for extracting a keyword set from a single document.
pub trait KeywordExtractor {
    /// Produce the set of distinct keywords for one document's raw text.
    fn extract(&self, text: &str) -> KeywordSet;
}

/// The canonical extractor: normalize, split on whitespace, dedupe.
pub struct WhitespaceExtractor {
    /// When true, digits and underscores survive normalization ("c99",
    /// "web3" stay whole tokens).
    pub permissive: bool,
}

impl Default for WhitespaceExtractor {
    fn default() -> Self {
        Self { permissive: false }
    }
}

impl KeywordExtractor for WhitespaceExtractor {
    fn extract(&self, text: &str) -> KeywordSet {
        if self.permissive {
            extract_keywords_permissive(text)
        } else {
            extract_keywords(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let extractor = WhitespaceExtractor::default();
        let kw = extractor.extract("C99 rocks");
        assert!(kw.contains("c"));
        assert!(!kw.contains("c99"));
    }

    #[test]
    fn test_permissive_flag() {
        let extractor = WhitespaceExtractor { permissive: true };
        assert!(extractor.extract("C99 rocks").contains("c99"));
    }
}
