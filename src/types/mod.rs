//! Core data types: languages, frequency entries, and the crate error type.

pub mod error;
pub mod frequency;
pub mod language;

pub use error::{WordfreqError, WordfreqResult};
pub use frequency::FrequencyEntry;
pub use language::LanguageCode;

/// An ordered sequence of tokens in left-to-right appearance order.
pub type TokenSequence = Vec<String>;

/// Frequency entries sorted by count descending, ties in first-occurrence order.
pub type RankedFrequencyList = Vec<FrequencyEntry>;
