//! Error types for keepmeaning-core.
//!
//! The analysis entry points ([`crate::scan`], [`crate::compute_flow`]) are
//! total and never fail. Errors only arise while loading configuration or
//! building a [`crate::Linter`] from user-supplied vocabulary.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when building a lint engine from configuration.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A weasel-word entry was empty or whitespace only.
    #[error("weasel-word vocabulary contains an empty entry")]
    EmptyVocabularyEntry,

    /// The passive-voice auxiliary list was empty or contained a blank entry.
    #[error("passive-voice auxiliaries must be non-empty words")]
    InvalidAuxiliaries,

    /// The sentence word threshold was zero.
    #[error("max_sentence_words must be at least 1")]
    ZeroSentenceThreshold,

    /// The vocabulary automaton could not be built.
    #[error("failed to build vocabulary matcher: {0}")]
    Vocabulary(#[from] aho_corasick::BuildError),

    /// The passive-voice pattern could not be compiled.
    #[error("failed to compile passive-voice pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias using [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
