//! Multilingual word-frequency analysis for English and Indic scripts.
//!
//! Raw text flows through four steps, in order:
//! [`normalize`] -> [`tokenize`] -> [`filter`] -> [`rank`].
//! The free functions use a shared default [`Pipeline`]; build your own from a
//! [`PipelineConfig`] to change strategies, stopwords, or thresholds.

pub mod config;
pub mod engine;
pub mod resource;
pub mod stopwords;
pub mod types;

use std::sync::LazyLock;

pub use config::PipelineConfig;
pub use engine::{
    normalize, normalize_opt, rank, AnalysisReport, Pipeline, StrategyKind, TokenStrategy,
    TokenizeMethod, Tokenization, Tokenizer,
};
pub use stopwords::StopwordRepository;
pub use types::{
    FrequencyEntry, LanguageCode, RankedFrequencyList, TokenSequence, WordfreqError,
    WordfreqResult,
};

static DEFAULT_PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::default);

/// The shared pipeline with default configuration.
pub fn default_pipeline() -> &'static Pipeline {
    &DEFAULT_PIPELINE
}

/// Tokenize normalized text for a language with the default strategies.
pub fn tokenize(text: &str, lang: LanguageCode) -> TokenSequence {
    DEFAULT_PIPELINE.tokenize(text, lang)
}

/// Remove built-in stopwords and single-character tokens.
pub fn filter(tokens: &[String], lang: LanguageCode) -> TokenSequence {
    DEFAULT_PIPELINE.filter(tokens, lang)
}
