//! Token counting and ranking.

use std::collections::HashMap;

use crate::types::{FrequencyEntry, RankedFrequencyList};

/// Count each distinct token, in order of first appearance.
pub fn count(tokens: &[String]) -> Vec<FrequencyEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for token in tokens {
        match positions.get(token.as_str()) {
            Some(&pos) => entries[pos].count += 1,
            None => {
                positions.insert(token.as_str(), entries.len());
                entries.push(FrequencyEntry::new(token.as_str(), 1));
            }
        }
    }

    entries
}

/// The `top_n` most frequent tokens, by count descending.
///
/// Equal counts keep first-occurrence order, so identical input always ranks
/// identically.
pub fn rank(tokens: &[String], top_n: usize) -> RankedFrequencyList {
    if tokens.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let mut entries = count(tokens);
    // Stable sort: ties stay in first-occurrence order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    entries
}
