//! Text processing utilities.
//!
//! Provides the terminator-based sentence segmenter shared by the lint engine
//! and the flow calculator, plus word counting and position helpers.
//!
//! The segmenter is deliberately crude: a sentence is a maximal run of
//! non-terminator characters followed by one or more of `.`, `!` or `?`.
//! Abbreviations and decimals are not special-cased, and a trailing fragment
//! with no terminator is not a sentence.

use std::sync::LazyLock;

use regex::Regex;

use crate::span::Span;

/// A sentence: non-terminators followed by a run of terminators.
static SENTENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("valid regex"));

/// A sentence located in its source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    /// Location in the source, including whitespace left over from the
    /// previous terminator.
    pub span: Span,
    /// Token count from splitting on whitespace runs. Leading whitespace
    /// yields one empty token, so `" Two words."` counts 3.
    pub word_count: usize,
}

impl Sentence {
    /// The sentence text within `source` (the buffer it was split from).
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source).unwrap_or_default()
    }
}

/// Split text into sentences with their byte spans.
///
/// Sentences come back in buffer order; repeated identical sentences get
/// distinct spans.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    SENTENCE_PATTERN
        .find_iter(text)
        .map(|m| Sentence {
            span: Span::new(m.start(), m.end()),
            word_count: sentence_tokens(m.as_str()),
        })
        .collect()
}

/// Tokens of a sentence split on whitespace runs, counting the empty token
/// before leading whitespace. Sentences end in a terminator, so there is
/// never a trailing empty token.
fn sentence_tokens(sentence: &str) -> usize {
    word_count(sentence) + usize::from(sentence.starts_with(char::is_whitespace))
}

/// Count whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Extract words from text, splitting on whitespace and stripping punctuation.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Returns `true` for characters that count as part of a word when checking
/// match boundaries.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// 1-indexed `(line, column)` of a byte offset. Columns count characters.
///
/// Offsets past the end clamp to the end; offsets inside a multi-byte
/// character resolve to that character.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Keep at most `max_chars` characters, appending `...` when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(source: &'a str, sentences: &[Sentence]) -> Vec<&'a str> {
        sentences.iter().map(|s| s.text(source)).collect()
    }

    #[test]
    fn basic_sentences() {
        let source = "This is a sentence. This is another sentence.";
        let sentences = split_sentences(source);
        assert_eq!(
            texts(source, &sentences),
            vec!["This is a sentence.", " This is another sentence."]
        );
        assert_eq!(sentences[0].word_count, 4);
        assert_eq!(sentences[1].word_count, 5);
    }

    #[test]
    fn terminator_runs_stay_with_their_sentence() {
        let source = "Really?! Yes... Fine.";
        let sentences = split_sentences(source);
        assert_eq!(texts(source, &sentences), vec!["Really?!", " Yes...", " Fine."]);
    }

    #[test]
    fn trailing_fragment_is_not_a_sentence() {
        let source = "Done. And then";
        let sentences = split_sentences(source);
        assert_eq!(texts(source, &sentences), vec!["Done."]);
    }

    #[test]
    fn no_terminators_yields_nothing() {
        assert!(split_sentences("no terminators at all").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn repeated_sentences_get_distinct_spans() {
        let source = "Go now. Go now. Go now.";
        let sentences = split_sentences(source);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].span, Span::new(0, 7));
        assert_eq!(sentences[1].span, Span::new(7, 15));
        assert_eq!(sentences[2].span, Span::new(15, 23));
    }

    #[test]
    fn spans_include_leading_whitespace() {
        let source = "One.\n\n   Two.";
        let sentences = split_sentences(source);
        assert_eq!(sentences[1].text(source), "\n\n   Two.");
        assert_eq!(sentences[1].span.start, 4);
    }

    #[test]
    fn leading_whitespace_counts_as_a_token() {
        let source = "One two three. Four five six.";
        let counts: Vec<usize> = split_sentences(source).iter().map(|s| s.word_count).collect();
        assert_eq!(counts, vec![3, 4]);
    }

    #[test]
    fn whitespace_only_body_is_a_sentence() {
        let counts: Vec<usize> = split_sentences("Hi.  .").iter().map(|s| s.word_count).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn word_count_ignores_whitespace_runs() {
        assert_eq!(word_count("  one   two\tthree\n"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn line_col_positions() {
        let text = "ab\ncdé\nf";
        assert_eq!(line_col(text, 0), (1, 1));
        assert_eq!(line_col(text, 3), (2, 1));
        assert_eq!(line_col(text, 8), (3, 1));
        assert_eq!(line_col(text, 999), (3, 2));
    }

    #[test]
    fn truncate_appends_marker_only_when_cut() {
        assert_eq!(truncate_chars("short", 20), "short");
        assert_eq!(truncate_chars("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_chars("ééééé", 2), "éé...");
    }
}
