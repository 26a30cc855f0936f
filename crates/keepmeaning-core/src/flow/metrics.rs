//! Computed secondary metrics.
//!
//! Every value is rounded to one decimal and is `0.0` when its denominator
//! (words or sentences) is zero.

use crate::lint::Linter;
use crate::text::{self, Sentence};
use crate::vocabulary::{TRANSITION_PHRASES, is_transition_word};

use super::report::FlowMetrics;

/// Upper bound for sentence variety.
const MAX_VARIETY: f64 = 10.0;

/// Derive metrics from the buffer and its sentences. `linter` supplies the
/// passive-voice pass.
pub(crate) fn compute(text: &str, sentences: &[Sentence], linter: &Linter) -> FlowMetrics {
    let words: Vec<String> = sentences
        .iter()
        .flat_map(|s| text::extract_words(s.text(text)))
        .collect();
    let passive = linter.passive_voice(text).len();

    let metrics = FlowMetrics {
        sentence_variety: round1(sentence_variety(text, sentences)),
        transition_density: round1(transition_density(&words)),
        passive_voice_ratio: round1(ratio(passive, sentences.len()).clamp(0.0, 1.0)),
        flesch_kincaid_grade: round1(grade_level(&words, sentences.len())),
    };
    tracing::debug!(
        words = words.len(),
        sentences = sentences.len(),
        passive,
        "computed flow metrics"
    );
    metrics
}

/// Half the population standard deviation of sentence lengths, capped.
///
/// Lengths are real whitespace-separated words, so the separator before a
/// sentence does not count toward its length here.
fn sentence_variety(text: &str, sentences: &[Sentence]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| text::word_count(s.text(text)) as f64)
        .collect();
    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    let variance = lengths.iter().map(|len| (len - mean).powi(2)).sum::<f64>() / n;
    (variance.sqrt() / 2.0).min(MAX_VARIETY)
}

/// Transition words and phrases per 100 words.
fn transition_density(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let singles = words.iter().filter(|w| is_transition_word(w)).count();
    let phrases: usize = TRANSITION_PHRASES
        .iter()
        .map(|phrase| {
            let parts: Vec<&str> = phrase.split(' ').collect();
            words
                .windows(parts.len())
                .filter(|window| window.iter().zip(&parts).all(|(w, p)| w == p))
                .count()
        })
        .sum();
    ratio(singles + phrases, words.len()) * 100.0
}

/// Flesch-Kincaid grade, floored at zero.
fn grade_level(words: &[String], sentences: usize) -> f64 {
    if words.is_empty() || sentences == 0 {
        return 0.0;
    }
    let syllables: usize = words.iter().map(|w| estimate_syllables(w)).sum();
    let words_per_sentence = ratio(words.len(), sentences);
    let syllables_per_word = ratio(syllables, words.len());
    (0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59).max(0.0)
}

/// Vowel-group syllable estimate for a lowercase word.
///
/// Counts runs of vowels (`y` included), then corrects for a silent final
/// `e`, a consonant + `le` ending, and a silent `-ed`. Never below one for a
/// word containing a letter.
pub(crate) fn estimate_syllables(word: &str) -> usize {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return 0;
    }
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0usize;
    let mut in_group = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    let n = letters.len();
    let ends_with = |suffix: &str| {
        let suffix: Vec<char> = suffix.chars().collect();
        n >= suffix.len() && letters[n - suffix.len()..] == suffix[..]
    };
    let before = |back: usize| n.checked_sub(back).and_then(|i| letters.get(i).copied());

    // "table": the l carries the syllable the final e would lose.
    let consonant_le = ends_with("le") && before(3).is_some_and(|c| !is_vowel(c));
    if ends_with("e") && !consonant_le && groups > 1 {
        groups -= 1;
    }
    if ends_with("ed") && groups > 1 && before(3).is_some_and(|c| c != 't' && c != 'd') {
        groups -= 1;
    }

    groups.max(1)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
