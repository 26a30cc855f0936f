//! Flow report types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Buffer-level fluency summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlowReport {
    /// 0-100, peaking at an average of 15 words per sentence.
    pub flow_score: u8,
    /// Secondary metrics.
    pub metrics: FlowMetrics,
    /// Improvement tips, highest priority first.
    pub recommendations: Vec<Recommendation>,
    /// Direction of travel; always stable without stored history.
    pub trend: Trend,
}

/// Secondary flow metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlowMetrics {
    /// Spread of sentence lengths (0-10).
    pub sentence_variety: f64,
    /// Transition words per 100 words.
    pub transition_density: f64,
    /// Passive constructions per sentence (0-1).
    pub passive_voice_ratio: f64,
    /// Flesch-Kincaid grade level.
    pub flesch_kincaid_grade: f64,
}

impl FlowMetrics {
    /// Fixed placeholder bundle used by the baseline model.
    pub const BASELINE: Self = Self {
        sentence_variety: 2.5,
        transition_density: 4.2,
        passive_voice_ratio: 0.1,
        flesch_kincaid_grade: 8.5,
    };
}

/// A single improvement tip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// What the tip is about.
    pub category: RecommendationCategory,
    /// How much it matters.
    pub priority: Priority,
    /// Text shown to the writer.
    pub tip: String,
}

impl Recommendation {
    pub(crate) fn new(
        category: RecommendationCategory,
        priority: Priority,
        tip: impl Into<String>,
    ) -> Self {
        Self {
            category,
            priority,
            tip: tip.into(),
        }
    }
}

/// Subject of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationCategory {
    /// Sentence length and rhythm.
    SentenceLength,
    /// Connective words between ideas.
    Transitions,
    /// Passive constructions.
    PassiveVoice,
    /// Reading grade level.
    Readability,
}

impl RecommendationCategory {
    /// Returns the category in kebab-case.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SentenceLength => "sentence-length",
            Self::Transitions => "transitions",
            Self::PassiveVoice => "passive-voice",
            Self::Readability => "readability",
        }
    }
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommendation urgency. Orders `High < Medium < Low` so an ascending sort
/// puts the most urgent first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Address first.
    High,
    /// Worth a pass.
    Medium,
    /// Polish.
    Low,
}

impl Priority {
    /// Returns the priority as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change in flow relative to earlier drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Scores are rising.
    Improving,
    /// No measurable change, or no history.
    Stable,
    /// Scores are falling.
    Declining,
}
