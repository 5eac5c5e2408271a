// Sentence-length quality signal.
//
// Counts sentences that run past the readability threshold. This is
// reported as its own signal, separate from the suggestion rules, so a
// rendering front end can show it as a standalone quality line.

/// A sentence longer than this many words is flagged as hard to read.
pub const LONG_SENTENCE_WORDS: usize = 35;

/// Count the sentences (split on '.') whose word count exceeds the
/// threshold. Returns 0 for empty text.
pub fn long_sentence_count(text: &str) -> usize {
    text.split('.')
        .filter(|sentence| sentence.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count()
}
