//! Local lint engine.
//!
//! [`Linter::scan`] runs three independent passes over the buffer and
//! concatenates their findings in pass order:
//!
//! 1. weasel words ([`Rule::WeaselWord`]), grouped by vocabulary entry
//! 2. passive voice ([`Rule::PassiveVoice`]), in buffer order
//! 3. overlong sentences ([`Rule::SentenceLength`]), in buffer order
//!
//! The result is not sorted by position; use
//! [`crate::finding::sort_by_position`] when that matters.
//!
//! Every pass is linear in the input. Callers that accept untrusted input
//! should cap its size before scanning (see [`crate::DEFAULT_MAX_INPUT_BYTES`]).

mod passive;
mod sentence_length;
mod weasel;

use std::sync::LazyLock;

use crate::config::LintConfig;
use crate::error::{EngineError, EngineResult};
use crate::finding::{Finding, Rule};
use crate::flow::{FlowOptions, FlowReport};
use crate::text;

use passive::PassiveMatcher;
use weasel::WeaselMatcher;

/// Engine built from the built-in vocabulary tables.
static DEFAULT_LINTER: LazyLock<Linter> = LazyLock::new(|| {
    Linter::new(&LintConfig::default()).expect("built-in vocabulary is valid")
});

/// A configured lint engine.
///
/// Building compiles the vocabulary automaton and the passive pattern once;
/// scanning is then allocation-light and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Linter {
    weasel: WeaselMatcher,
    passive: PassiveMatcher,
    max_sentence_words: usize,
}

impl Linter {
    /// Build an engine from lint configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] for a blank vocabulary entry, an empty or
    /// blank auxiliary list, or a sentence threshold of zero.
    pub fn new(config: &LintConfig) -> EngineResult<Self> {
        if config.max_sentence_words == 0 {
            return Err(EngineError::ZeroSentenceThreshold);
        }
        let weasel = WeaselMatcher::new(config.weasel_vocabulary())?;
        let passive = PassiveMatcher::new(&config.auxiliaries())?;
        tracing::debug!(
            vocabulary = weasel.vocabulary().len(),
            max_sentence_words = config.max_sentence_words,
            "lint engine built"
        );
        Ok(Self {
            weasel,
            passive,
            max_sentence_words: config.max_sentence_words,
        })
    }

    /// The engine used by [`scan`].
    pub fn builtin() -> &'static Self {
        &DEFAULT_LINTER
    }

    /// Weasel-word entries this engine looks for, lowercased.
    pub fn vocabulary(&self) -> &[String] {
        self.weasel.vocabulary()
    }

    /// Flow report whose computed passive ratio comes from this engine's
    /// auxiliaries. Sentence segmentation and the score are unaffected by
    /// lint configuration.
    pub fn compute_flow(&self, text: &str, options: &FlowOptions) -> FlowReport {
        crate::flow::report(text, options, self)
    }

    /// Run all passes over `text`.
    ///
    /// Total and deterministic: any string is accepted, and the same input
    /// always yields the same findings in the same order.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        if text.is_empty() {
            return Vec::new();
        }

        let weasel = self.weasel_words(text);
        let passive = self.passive_voice(text);
        let sentences = text::split_sentences(text);
        let long = sentence_length::find(text, &sentences, self.max_sentence_words);

        tracing::debug!(
            weasel = weasel.len(),
            passive = passive.len(),
            long_sentences = long.len(),
            sentences = sentences.len(),
            "scan complete"
        );

        let mut findings = weasel;
        findings.extend(passive);
        findings.extend(long);
        findings
    }

    /// Only the weasel-word pass.
    pub fn weasel_words(&self, text: &str) -> Vec<Finding> {
        self.weasel.find(text)
    }

    /// Only the passive-voice pass.
    pub fn passive_voice(&self, text: &str) -> Vec<Finding> {
        self.passive.find(text)
    }

    /// Only the sentence-length pass.
    pub fn long_sentences(&self, text: &str) -> Vec<Finding> {
        sentence_length::find(text, &text::split_sentences(text), self.max_sentence_words)
    }

    /// Findings of a single rule.
    pub fn scan_rule(&self, text: &str, rule: Rule) -> Vec<Finding> {
        match rule {
            Rule::WeaselWord => self.weasel_words(text),
            Rule::PassiveVoice => self.passive_voice(text),
            Rule::SentenceLength => self.long_sentences(text),
        }
    }
}

/// Scan `text` with the built-in vocabulary and a 40-word sentence limit.
pub fn scan(text: &str) -> Vec<Finding> {
    DEFAULT_LINTER.scan(text)
}
