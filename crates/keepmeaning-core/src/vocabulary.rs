//! Curated word tables for the local engine.
//!
//! The tables are ordered: detection passes report matches grouped by table
//! entry, in the order listed here. Configuration can replace or extend the
//! weasel-word and auxiliary tables (see [`crate::config::LintConfig`]).

/// Low-information qualifiers flagged by the weasel-word pass.
pub const WEASEL_WORDS: &[&str] = &[
    "very",
    "basically",
    "actually",
    "sort of",
    "kind of",
    "really",
];

/// Auxiliary verb forms that open a passive construction.
pub const PASSIVE_AUXILIARIES: &[&str] = &["am", "are", "is", "was", "were", "be", "been", "being"];

/// Single-word transitions counted by the computed flow metrics.
pub const TRANSITION_WORDS: &[&str] = &[
    "however",
    "therefore",
    "thus",
    "consequently",
    "nevertheless",
    "moreover",
    "furthermore",
    "additionally",
    "meanwhile",
    "instead",
    "otherwise",
    "similarly",
    "likewise",
    "conversely",
    "nonetheless",
    "hence",
    "accordingly",
    "subsequently",
    "finally",
    "first",
    "second",
    "next",
    "then",
    "also",
];

/// Multi-word transitions counted by the computed flow metrics.
pub const TRANSITION_PHRASES: &[&str] = &[
    "for example",
    "for instance",
    "in addition",
    "in contrast",
    "on the other hand",
    "as a result",
    "in conclusion",
    "in summary",
    "in other words",
    "after all",
];

/// Returns `true` if `word` (already lowercased and trimmed) is a transition.
pub fn is_transition_word(word: &str) -> bool {
    TRANSITION_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lowercase() {
        for entry in WEASEL_WORDS
            .iter()
            .chain(PASSIVE_AUXILIARIES)
            .chain(TRANSITION_WORDS)
            .chain(TRANSITION_PHRASES)
        {
            assert_eq!(*entry, entry.to_lowercase(), "{entry} should be lowercase");
        }
    }

    #[test]
    fn weasel_words_keep_declared_order() {
        assert_eq!(WEASEL_WORDS.first(), Some(&"very"));
        assert_eq!(WEASEL_WORDS.last(), Some(&"really"));
    }

    #[test]
    fn transition_lookup() {
        assert!(is_transition_word("however"));
        assert!(!is_transition_word("banana"));
    }
}
