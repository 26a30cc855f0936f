//! Findings emitted by the local lint engine.
//!
//! A [`Finding`] is a located, explained issue in a text buffer. Findings are
//! plain values: the engine creates them fresh on every scan and keeps no
//! accepted/dismissed state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Issue taxonomy shared with cloud-sourced findings.
///
/// The local engine only emits [`Category::Style`] and [`Category::Syntax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Category {
    /// Misspelled words (reserved).
    Spelling,
    /// Punctuation problems (reserved).
    Punctuation,
    /// Sentence construction issues.
    Syntax,
    /// Stylistic weaknesses.
    Style,
}

impl Category {
    /// Returns the category as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spelling => "spelling",
            Self::Punctuation => "punctuation",
            Self::Syntax => "syntax",
            Self::Style => "style",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The detection pass that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Low-information qualifier ("very", "sort of").
    WeaselWord,
    /// Auxiliary verb followed by an `-ed` word.
    PassiveVoice,
    /// Sentence over the word threshold.
    SentenceLength,
}

impl Rule {
    /// Returns the rule name in kebab-case.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeaselWord => "weasel-word",
            Self::PassiveVoice => "passive-voice",
            Self::SentenceLength => "sentence-length",
        }
    }

    /// Category every finding of this rule is filed under.
    pub const fn category(&self) -> Category {
        match self {
            Self::WeaselWord | Self::SentenceLength => Category::Style,
            Self::PassiveVoice => Category::Syntax,
        }
    }

    /// Fixed confidence assigned to findings of this rule.
    pub const fn confidence(&self) -> f64 {
        match self {
            Self::WeaselWord => 0.9,
            Self::PassiveVoice => 0.7,
            Self::SentenceLength => 0.8,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a finding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Produced by this engine, without any network call.
    Local,
    /// Produced by a hosted model (never emitted here).
    Cloud,
}

/// One detected issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Identifier unique within a single scan (`rule:start-end`).
    pub id: String,
    /// Detector that produced the finding.
    pub rule: Rule,
    /// Issue category.
    pub category: Category,
    /// Byte range into the scanned text.
    pub span: Span,
    /// Exact text covered by `span`.
    pub matched_text: String,
    /// Display form of the match (long sentences are shortened).
    pub excerpt: String,
    /// Replacement text; empty when there is no mechanical fix.
    pub suggestion: String,
    /// Fixed per-rule confidence in `[0, 1]`.
    pub confidence: f64,
    /// Human-readable rationale.
    pub explanation: String,
    /// Always [`Origin::Local`] for this engine.
    pub origin: Origin,
}

impl Finding {
    /// Build a finding for `span` in `text`.
    ///
    /// Returns `None` when the span does not fit the buffer, so a pass can
    /// never emit corrupted offsets.
    pub fn located(
        rule: Rule,
        text: &str,
        span: Span,
        suggestion: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Option<Self> {
        let Some(matched) = span.slice(text) else {
            tracing::trace!(rule = rule.as_str(), %span, "dropping finding outside buffer");
            return None;
        };
        Some(Self {
            id: format!("{rule}:{span}"),
            rule,
            category: rule.category(),
            span,
            matched_text: matched.to_string(),
            excerpt: matched.to_string(),
            suggestion: suggestion.into(),
            confidence: rule.confidence(),
            explanation: explanation.into(),
            origin: Origin::Local,
        })
    }

    /// Replace the display excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Returns `true` if the finding still describes `text` exactly.
    pub fn matches(&self, text: &str) -> bool {
        self.span.slice(text) == Some(self.matched_text.as_str())
    }

    /// Splice the suggestion into `text` in place of the span.
    ///
    /// Returns `None` if the span does not fit `text`.
    pub fn apply(&self, text: &str) -> Option<String> {
        if !self.span.fits(text) {
            return None;
        }
        let mut out = String::with_capacity(text.len() + self.suggestion.len());
        out.push_str(&text[..self.span.start]);
        out.push_str(&self.suggestion);
        out.push_str(&text[self.span.end..]);
        Some(out)
    }
}

/// Order findings by start offset, keeping pass order for ties.
pub fn sort_by_position(findings: &mut [Finding]) {
    findings.sort_by_key(|f| f.span.start);
}
