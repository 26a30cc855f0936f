//! Sentence-length pass.

use crate::finding::{Finding, Rule};
use crate::text::{Sentence, truncate_chars};

/// Characters of a long sentence kept in its excerpt.
const EXCERPT_CHARS: usize = 20;

/// Flag every sentence with more than `max_words` words.
///
/// Spans come straight from the segmenter, so repeated identical sentences
/// each resolve to their own location.
pub(crate) fn find(text: &str, sentences: &[Sentence], max_words: usize) -> Vec<Finding> {
    sentences
        .iter()
        .filter(|sentence| sentence.word_count > max_words)
        .filter_map(|sentence| {
            let finding = Finding::located(
                Rule::SentenceLength,
                text,
                sentence.span,
                "Split sentence",
                format!("This sentence is very long (>{max_words} words). Consider splitting it."),
            )?;
            let excerpt = truncate_chars(&finding.matched_text, EXCERPT_CHARS);
            Some(finding.with_excerpt(excerpt))
        })
        .collect()
}
