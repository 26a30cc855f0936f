//! Recommendation policies.

use super::report::{FlowMetrics, Priority, Recommendation, RecommendationCategory};

const VARY_LENGTH_TIP: &str = "Try varying sentence length to improve rhythm.";
const TRANSITIONS_TIP: &str = "Use more transition words like \"However\" or \"Therefore\".";
const SPLIT_LONG_TIP: &str = "Sentences run long on average. Split the longest ones.";
const PASSIVE_TIP: &str = "Several sentences use passive voice. Say who performs the action.";
const READABILITY_TIP: &str = "The reading grade is high. Prefer shorter words and sentences.";

/// Average sentence length above which sentences are "long".
const LONG_AVERAGE: f64 = 25.0;
/// Variety below which rhythm is flat.
const MIN_VARIETY: f64 = 2.0;
/// Transition density below which ideas feel disconnected.
const MIN_TRANSITIONS: f64 = 2.0;
/// Passive ratio above which passive voice is overused.
const MAX_PASSIVE_RATIO: f64 = 0.2;
/// Grade level above which text is hard to read.
const MAX_GRADE: f64 = 12.0;

/// The two tips every report carries under the fixed policy.
pub(crate) fn fixed() -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            RecommendationCategory::SentenceLength,
            Priority::Medium,
            VARY_LENGTH_TIP,
        ),
        Recommendation::new(
            RecommendationCategory::Transitions,
            Priority::Low,
            TRANSITIONS_TIP,
        ),
    ]
}

/// Tips whose metric crosses its threshold, most urgent first.
pub(crate) fn gated(
    metrics: &FlowMetrics,
    average_length: f64,
    sentences: usize,
) -> Vec<Recommendation> {
    let mut tips = Vec::new();
    if average_length > LONG_AVERAGE {
        tips.push(Recommendation::new(
            RecommendationCategory::SentenceLength,
            Priority::High,
            SPLIT_LONG_TIP,
        ));
    }
    if sentences > 1 && metrics.sentence_variety < MIN_VARIETY {
        tips.push(Recommendation::new(
            RecommendationCategory::SentenceLength,
            Priority::Medium,
            VARY_LENGTH_TIP,
        ));
    }
    if metrics.transition_density < MIN_TRANSITIONS {
        tips.push(Recommendation::new(
            RecommendationCategory::Transitions,
            Priority::Low,
            TRANSITIONS_TIP,
        ));
    }
    if metrics.passive_voice_ratio > MAX_PASSIVE_RATIO {
        tips.push(Recommendation::new(
            RecommendationCategory::PassiveVoice,
            Priority::Medium,
            PASSIVE_TIP,
        ));
    }
    if metrics.flesch_kincaid_grade > MAX_GRADE {
        tips.push(Recommendation::new(
            RecommendationCategory::Readability,
            Priority::Medium,
            READABILITY_TIP,
        ));
    }
    tips.sort_by_key(|tip| tip.priority);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALM: FlowMetrics = FlowMetrics {
        sentence_variety: 3.0,
        transition_density: 5.0,
        passive_voice_ratio: 0.0,
        flesch_kincaid_grade: 7.0,
    };

    #[test]
    fn fixed_list_matches_baseline() {
        let tips = fixed();
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].category, RecommendationCategory::SentenceLength);
        assert_eq!(tips[0].priority, Priority::Medium);
        assert_eq!(tips[0].tip, "Try varying sentence length to improve rhythm.");
        assert_eq!(tips[1].category, RecommendationCategory::Transitions);
        assert_eq!(tips[1].priority, Priority::Low);
        assert_eq!(
            tips[1].tip,
            "Use more transition words like \"However\" or \"Therefore\"."
        );
    }

    #[test]
    fn healthy_metrics_need_no_tips() {
        assert!(gated(&CALM, 15.0, 4).is_empty());
    }

    #[test]
    fn single_sentence_never_gets_variety_tip() {
        let flat = FlowMetrics {
            sentence_variety: 0.0,
            ..CALM
        };
        assert!(gated(&flat, 15.0, 1).is_empty());
        assert_eq!(gated(&flat, 15.0, 2).len(), 1);
    }

    #[test]
    fn every_gate_fires_in_priority_order() {
        let rough = FlowMetrics {
            sentence_variety: 0.5,
            transition_density: 0.0,
            passive_voice_ratio: 0.5,
            flesch_kincaid_grade: 14.0,
        };
        let order: Vec<(RecommendationCategory, Priority)> = gated(&rough, 30.0, 3)
            .iter()
            .map(|tip| (tip.category, tip.priority))
            .collect();
        assert_eq!(
            order,
            vec![
                (RecommendationCategory::SentenceLength, Priority::High),
                (RecommendationCategory::SentenceLength, Priority::Medium),
                (RecommendationCategory::PassiveVoice, Priority::Medium),
                (RecommendationCategory::Readability, Priority::Medium),
                (RecommendationCategory::Transitions, Priority::Low),
            ]
        );
    }
}
