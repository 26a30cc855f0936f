//! Passive-voice pass.
//!
//! A surface pattern, not a parser: an auxiliary verb, whitespace, then one
//! word ending in `ed` with at least two word characters before the suffix.
//! "was baked" and "was excited" match; "is red" does not.

use regex::Regex;

use crate::error::{EngineError, EngineResult};
use crate::finding::{Finding, Rule};
use crate::span::Span;

const EXPLANATION: &str = "Passive voice detected. Consider rewriting in active voice for clarity.";
const SUGGESTION: &str = "active voice";

/// Compiled auxiliary + participle pattern.
#[derive(Debug, Clone)]
pub(crate) struct PassiveMatcher {
    pattern: Regex,
}

impl PassiveMatcher {
    pub(crate) fn new(auxiliaries: &[String]) -> EngineResult<Self> {
        if auxiliaries.is_empty() || auxiliaries.iter().any(|aux| aux.trim().is_empty()) {
            return Err(EngineError::InvalidAuxiliaries);
        }
        let alternation = auxiliaries
            .iter()
            .map(|aux| regex::escape(aux.trim()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{alternation})\s+\w{{2,}}ed\b"))?;
        Ok(Self { pattern })
    }

    /// Non-overlapping matches in buffer order.
    pub(crate) fn find(&self, text: &str) -> Vec<Finding> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| {
                Finding::located(
                    Rule::PassiveVoice,
                    text,
                    Span::new(m.start(), m.end()),
                    SUGGESTION,
                    EXPLANATION,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::PASSIVE_AUXILIARIES;

    fn default_matcher() -> PassiveMatcher {
        let auxiliaries: Vec<String> = PASSIVE_AUXILIARIES.iter().map(|w| (*w).to_string()).collect();
        PassiveMatcher::new(&auxiliaries).unwrap()
    }

    #[test]
    fn detects_auxiliary_plus_participle() {
        let findings = default_matcher().find("The cake was baked by him.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].matched_text, "was baked");
        assert_eq!(findings[0].suggestion, "active voice");
        assert_eq!(findings[0].explanation, EXPLANATION);
    }

    #[test]
    fn short_ed_words_are_not_participles() {
        assert!(default_matcher().find("The door is red.").is_empty());
        assert!(default_matcher().find("It was fed.").is_empty());
    }

    #[test]
    fn known_false_positive_still_matches() {
        let findings = default_matcher().find("She was excited.");
        assert_eq!(findings[0].matched_text, "was excited");
    }

    #[test]
    fn case_insensitive_and_whitespace_tolerant() {
        let findings = default_matcher().find("WERE\n\tHANDLED quickly");
        assert_eq!(findings[0].matched_text, "WERE\n\tHANDLED");
    }

    #[test]
    fn auxiliary_must_be_a_whole_word() {
        assert!(default_matcher().find("This wasn baked.").is_empty());
        assert!(default_matcher().find("Kiss baked bread.").is_empty());
    }

    #[test]
    fn participle_must_end_the_word() {
        assert!(default_matcher().find("It is bakedly done.").is_empty());
    }

    #[test]
    fn multiple_matches_in_order() {
        let findings = default_matcher().find("It was opened. They were closed.");
        let spans: Vec<Span> = findings.iter().map(|f| f.span).collect();
        assert_eq!(spans, vec![Span::new(3, 13), Span::new(20, 31)]);
    }

    #[test]
    fn custom_auxiliaries_are_escaped() {
        let matcher = PassiveMatcher::new(&["got".to_string()]).unwrap();
        assert_eq!(matcher.find("He got stopped.")[0].matched_text, "got stopped");
        assert!(matcher.find("He was stopped.").is_empty());
    }

    #[test]
    fn empty_auxiliaries_are_rejected() {
        assert!(matches!(
            PassiveMatcher::new(&[]),
            Err(EngineError::InvalidAuxiliaries)
        ));
        assert!(matches!(
            PassiveMatcher::new(&["was".to_string(), String::new()]),
            Err(EngineError::InvalidAuxiliaries)
        ));
    }
}
