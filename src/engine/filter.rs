//! Stopword and length filtering.

use std::collections::HashSet;

use crate::types::TokenSequence;

/// Drop stopwords and tokens shorter than `min_chars` characters.
///
/// Order and duplicates of surviving tokens are preserved. A missing stopword
/// set disables stopword matching but the length rule still applies.
pub fn filter_tokens(
    tokens: &[String],
    stopwords: Option<&HashSet<String>>,
    min_chars: usize,
) -> TokenSequence {
    tokens
        .iter()
        .filter(|token| token.chars().count() >= min_chars)
        .filter(|token| !stopwords.is_some_and(|set| set.contains(token.as_str())))
        .cloned()
        .collect()
}
