//! Text processing engine: normalization, tokenization, filtering, ranking.

pub mod filter;
pub mod frequency;
pub mod normalizer;
pub mod pipeline;
pub mod strategy;
pub mod tokenizer;

pub use filter::filter_tokens;
pub use frequency::{count, rank};
pub use normalizer::{normalize, normalize_opt};
pub use pipeline::{AnalysisReport, Pipeline};
pub use strategy::{StrategyKind, TokenStrategy};
pub use tokenizer::{word_fallback, TokenizeMethod, Tokenization, Tokenizer};
