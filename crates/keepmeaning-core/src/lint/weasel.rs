//! Weasel-word pass.
//!
//! One Aho-Corasick automaton scans the buffer once for every vocabulary
//! entry. Hits are kept only when both neighbours are non-word characters,
//! then regrouped by entry so output follows vocabulary order.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::{EngineError, EngineResult};
use crate::finding::{Finding, Rule};
use crate::span::Span;
use crate::text::is_word_char;

/// Compiled weasel-word vocabulary.
#[derive(Debug, Clone)]
pub(crate) struct WeaselMatcher {
    automaton: AhoCorasick,
    vocabulary: Vec<String>,
}

impl WeaselMatcher {
    /// Compile `vocabulary`. Entries must be non-blank; the list may be empty.
    pub(crate) fn new(vocabulary: Vec<String>) -> EngineResult<Self> {
        if vocabulary.iter().any(|entry| entry.trim().is_empty()) {
            return Err(EngineError::EmptyVocabularyEntry);
        }
        // Overlapping iteration needs standard match semantics.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&vocabulary)?;
        Ok(Self {
            automaton,
            vocabulary,
        })
    }

    pub(crate) fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Every bounded occurrence of every entry, grouped by entry.
    pub(crate) fn find(&self, text: &str) -> Vec<Finding> {
        let mut hits: Vec<(usize, usize, usize)> = self
            .automaton
            .find_overlapping_iter(text)
            .filter(|m| is_bounded(text, m.start(), m.end()))
            .map(|m| (m.pattern().as_usize(), m.start(), m.end()))
            .collect();
        hits.sort_unstable();

        hits.into_iter()
            .filter_map(|(pattern, start, end)| {
                let entry = self.vocabulary.get(pattern)?;
                Finding::located(
                    Rule::WeaselWord,
                    text,
                    Span::new(start, end),
                    "",
                    format!(
                        "The word \"{entry}\" often weakens your statement. Consider removing it."
                    ),
                )
            })
            .collect()
    }
}

/// `true` when the characters on either side of `[start, end)` are not word
/// characters (or are the buffer edges).
fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text.get(..start).and_then(|s| s.chars().next_back());
    let after = text.get(end..).and_then(|s| s.chars().next());
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
