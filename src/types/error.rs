//! Error types for the word-frequency pipeline.

use thiserror::Error;

/// Errors raised by fallible surfaces of the crate.
///
/// The core operations (normalize, tokenize, filter, rank) never return these
/// to callers; tokenization failures are absorbed by the fallback chain.
#[derive(Error, Debug)]
pub enum WordfreqError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Resource unavailable: {resource}: {reason}")]
    ResourceUnavailable {
        resource: &'static str,
        reason: String,
    },

    #[error("Tokenization failed in {strategy}: {reason}")]
    Tokenization {
        strategy: &'static str,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type WordfreqResult<T> = Result<T, WordfreqError>;
