//! Ranked frequency entries.

use serde::{Deserialize, Serialize};

/// A distinct token and how often it occurred. `count` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub token: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

impl PartialEq<(&str, usize)> for FrequencyEntry {
    fn eq(&self, other: &(&str, usize)) -> bool {
        self.token == other.0 && self.count == other.1
    }
}
