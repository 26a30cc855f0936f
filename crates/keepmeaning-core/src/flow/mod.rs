//! Flow metrics calculator.
//!
//! Scores how a text reads as a whole. The headline number is driven by
//! average sentence length alone: 15 words per sentence scores 100, and each
//! word of deviation in either direction costs two points.
//!
//! Secondary metrics and recommendations are selected by [`FlowOptions`]:
//!
//! | Option | Default | Alternative |
//! |--------|---------|-------------|
//! | [`MetricsModel`] | `Baseline`: fixed placeholder values | `Computed`: derived from the text |
//! | [`RecommendationPolicy`] | `Fixed`: same two tips every time | `Gated`: tips whose metric crosses a threshold |

mod metrics;
mod recommendations;
mod report;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lint::Linter;
use crate::text::{self, Sentence};

pub use report::{FlowMetrics, FlowReport, Priority, Recommendation, RecommendationCategory, Trend};

/// Average sentence length that scores 100.
pub const IDEAL_SENTENCE_LENGTH: f64 = 15.0;

/// Points lost per word of deviation from the ideal.
const PENALTY_PER_WORD: f64 = 2.0;

/// How secondary metrics are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MetricsModel {
    /// Fixed placeholder values ([`FlowMetrics::BASELINE`]).
    #[default]
    Baseline,
    /// Variety, transitions, passive ratio and grade computed from the text.
    Computed,
}

impl MetricsModel {
    /// Returns the model name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Computed => "computed",
        }
    }
}

/// Which recommendations a report carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RecommendationPolicy {
    /// A medium sentence-length tip and a low transitions tip, always.
    #[default]
    Fixed,
    /// Only tips whose metric crosses its threshold.
    Gated,
}

impl RecommendationPolicy {
    /// Returns the policy name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Gated => "gated",
        }
    }
}

/// Model selection for [`compute_flow_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FlowOptions {
    /// Secondary metrics model.
    pub metrics: MetricsModel,
    /// Recommendation policy.
    pub recommendations: RecommendationPolicy,
}

/// Compute a flow report with the baseline model and fixed recommendations.
pub fn compute_flow(text: &str) -> FlowReport {
    compute_flow_with(text, &FlowOptions::default())
}

/// Compute a flow report with explicit options.
///
/// Total: empty input and input without terminators score as an average
/// sentence length of zero. The computed passive ratio uses the built-in
/// auxiliaries; see [`Linter::compute_flow`] for a configured engine.
pub fn compute_flow_with(text: &str, options: &FlowOptions) -> FlowReport {
    report(text, options, Linter::builtin())
}

#[tracing::instrument(skip_all, fields(
    text_len = text.len(),
    metrics = options.metrics.as_str(),
    recommendations = options.recommendations.as_str()
))]
pub(crate) fn report(text: &str, options: &FlowOptions, linter: &Linter) -> FlowReport {
    let sentences = text::split_sentences(text);
    let average = mean_length(&sentences);
    let flow_score = score_for_average(average);

    let metrics = match options.metrics {
        MetricsModel::Baseline => FlowMetrics::BASELINE,
        MetricsModel::Computed => metrics::compute(text, &sentences, linter),
    };
    let recommendations = match options.recommendations {
        RecommendationPolicy::Fixed => recommendations::fixed(),
        RecommendationPolicy::Gated => recommendations::gated(&metrics, average, sentences.len()),
    };

    tracing::debug!(
        sentences = sentences.len(),
        average,
        flow_score,
        "flow computed"
    );

    FlowReport {
        flow_score,
        metrics,
        recommendations,
        trend: Trend::Stable,
    }
}

/// Mean words per sentence, averaging over at least one sentence.
pub fn average_sentence_length(text: &str) -> f64 {
    mean_length(&text::split_sentences(text))
}

/// Flow score for an average sentence length: `100 - 2 * |15 - avg|`,
/// clamped to `0..=100` and rounded.
pub fn score_for_average(average: f64) -> u8 {
    let raw = PENALTY_PER_WORD.mul_add(-(IDEAL_SENTENCE_LENGTH - average).abs(), 100.0);
    // NaN saturates to 0 in the cast.
    raw.clamp(0.0, 100.0).round() as u8
}

fn mean_length(sentences: &[Sentence]) -> f64 {
    let words: usize = sentences.iter().map(|s| s.word_count).sum();
    words as f64 / sentences.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_of(words: usize) -> String {
        let body: Vec<&str> = std::iter::repeat_n("word", words).collect();
        format!("{}.", body.join(" "))
    }

    #[test]
    fn empty_input_scores_seventy() {
        let report = compute_flow("");
        assert_eq!(report.flow_score, 70);
        assert_eq!(report.trend, Trend::Stable);
        assert!(average_sentence_length("").abs() < f64::EPSILON);
    }

    #[test]
    fn unterminated_text_counts_as_no_sentences() {
        assert_eq!(compute_flow("fifteen words but no full stop").flow_score, 70);
    }

    #[test]
    fn ideal_length_scores_hundred() {
        assert_eq!(compute_flow(&sentence_of(15)).flow_score, 100);
    }

    #[test]
    fn deviation_costs_two_points_per_word() {
        assert_eq!(compute_flow(&sentence_of(10)).flow_score, 90);
        assert_eq!(compute_flow(&sentence_of(20)).flow_score, 90);
        assert_eq!(compute_flow(&sentence_of(65)).flow_score, 0);
    }

    #[test]
    fn averages_across_sentences() {
        // The second sentence carries a leading space: 10 and 14 tokens.
        let text = format!("{} {}", sentence_of(10), sentence_of(13));
        assert!((average_sentence_length(&text) - 12.0).abs() < f64::EPSILON);
        assert_eq!(compute_flow(&text).flow_score, 94);
    }

    #[test]
    fn score_curve_is_monotonic_and_bounded() {
        let mut previous = score_for_average(0.0);
        for tenth in 1..=150 {
            let score = score_for_average(f64::from(tenth) / 10.0);
            assert!(score >= previous, "rising side must not drop");
            previous = score;
        }
        for tenth in 151..=1000 {
            let score = score_for_average(f64::from(tenth) / 10.0);
            assert!(score <= previous, "falling side must not rise");
            assert!(score <= 100);
            previous = score;
        }
        assert_eq!(score_for_average(f64::NAN), 0);
        assert_eq!(score_for_average(-5.0), 60);
    }

    #[test]
    fn baseline_report_uses_placeholders() {
        let report = compute_flow("Any text at all. With two sentences.");
        assert_eq!(report.metrics, FlowMetrics::BASELINE);
        assert_eq!(report.recommendations.len(), 2);
        assert_eq!(report.recommendations[0].priority, Priority::Medium);
        assert_eq!(report.recommendations[1].priority, Priority::Low);
    }

    #[test]
    fn computed_metrics_stay_in_range() {
        let options = FlowOptions {
            metrics: MetricsModel::Computed,
            recommendations: RecommendationPolicy::Gated,
        };
        let samples = [
            "",
            "...",
            "It was baked. It was baked. It was baked.",
            "However, it works. Therefore it ships! Also: done?",
            "Ünïcödé tëxt wäs prïntëd. 日本語。",
        ];
        for text in samples {
            let report = compute_flow_with(text, &options);
            let m = report.metrics;
            for value in [
                m.sentence_variety,
                m.transition_density,
                m.passive_voice_ratio,
                m.flesch_kincaid_grade,
            ] {
                assert!(value.is_finite() && value >= 0.0, "{text:?}: {m:?}");
            }
            assert!((0.0..=1.0).contains(&m.passive_voice_ratio));
            assert!(report.flow_score <= 100);
        }
    }

    #[test]
    fn gated_recommendations_follow_metrics() {
        let options = FlowOptions {
            metrics: MetricsModel::Computed,
            recommendations: RecommendationPolicy::Gated,
        };
        let report = compute_flow_with("It was baked. It was baked. It was baked.", &options);
        let categories: Vec<RecommendationCategory> =
            report.recommendations.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                RecommendationCategory::SentenceLength,
                RecommendationCategory::PassiveVoice,
                RecommendationCategory::Transitions,
            ]
        );
    }

    #[test]
    fn short_sentences_score_with_leading_space_tokens() {
        // Tokens 3 and 4.
        assert_eq!(compute_flow("One two three. Four five six.").flow_score, 77);
    }

    #[test]
    fn configured_auxiliaries_drive_passive_ratio() {
        let options = FlowOptions {
            metrics: MetricsModel::Computed,
            recommendations: RecommendationPolicy::Fixed,
        };
        let text = "The car got stopped. We left.";
        let builtin = compute_flow_with(text, &options);
        assert!(builtin.metrics.passive_voice_ratio.abs() < f64::EPSILON);

        let linter = Linter::new(&crate::LintConfig {
            passive_auxiliaries: Some(vec!["got".to_string()]),
            ..crate::LintConfig::default()
        })
        .unwrap();
        let configured = linter.compute_flow(text, &options);
        assert!((configured.metrics.passive_voice_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(configured.flow_score, builtin.flow_score);
    }

    #[test]
    fn flow_is_deterministic() {
        let text = "Basically it was handled. It is really, really fine.";
        assert_eq!(compute_flow(text), compute_flow(text));
    }
}
