//! Per-language stopword sets.
//!
//! The repository is immutable once built. [`StopwordRepository::global`] holds
//! the built-in lists behind a once-only initializer; callers that need custom
//! words build their own with [`StopwordRepository::with_extra`] and pass it
//! into the pipeline explicitly.

mod assamese;
mod english;
mod hindi;
mod manipuri;

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

use crate::types::LanguageCode;

static GLOBAL: LazyLock<StopwordRepository> = LazyLock::new(|| {
    let repo = StopwordRepository::builtin();
    log::info!(
        "Loaded stopwords for {} languages",
        repo.sets.values().filter(|s| !s.is_empty()).count()
    );
    repo
});

/// Immutable mapping from language to its stopword set.
#[derive(Debug, Clone, Default)]
pub struct StopwordRepository {
    sets: BTreeMap<LanguageCode, HashSet<String>>,
}

impl StopwordRepository {
    /// Shared repository with the built-in lists, built on first access.
    pub fn global() -> &'static StopwordRepository {
        &GLOBAL
    }

    /// Build a repository from the built-in lists.
    ///
    /// Words are NFC-normalized so that composition-excluded characters match
    /// normalized tokens.
    pub fn builtin() -> Self {
        let mut sets = BTreeMap::new();
        for lang in LanguageCode::ALL {
            sets.insert(lang, builtin_words(lang).iter().map(|w| nfc(w)).collect());
        }
        Self { sets }
    }

    /// A repository with no stopwords for any language.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add words to a language's set, returning the extended repository.
    pub fn with_extra<I, S>(mut self, lang: LanguageCode, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.sets.entry(lang).or_default();
        for word in words {
            let word = nfc(word.as_ref().trim());
            if !word.is_empty() {
                set.insert(word);
            }
        }
        self
    }

    /// The stopword set registered for a language, if any.
    pub fn get(&self, lang: LanguageCode) -> Option<&HashSet<String>> {
        self.sets.get(&lang)
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, lang: LanguageCode, word: &str) -> bool {
        self.sets
            .get(&lang)
            .map(|set| set.contains(word))
            .unwrap_or(false)
    }

    /// Number of stopwords registered for a language.
    pub fn len(&self, lang: LanguageCode) -> usize {
        self.sets.get(&lang).map(|set| set.len()).unwrap_or(0)
    }

    /// Whether the language has no stopwords registered.
    pub fn is_empty(&self, lang: LanguageCode) -> bool {
        self.len(lang) == 0
    }

    /// The stopwords for a language, sorted for stable display.
    pub fn sorted_words(&self, lang: LanguageCode) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .sets
            .get(&lang)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        words.sort_unstable();
        words
    }
}

fn builtin_words(lang: LanguageCode) -> &'static [&'static str] {
    match lang {
        LanguageCode::English => english::WORDS,
        LanguageCode::Hindi => hindi::WORDS,
        LanguageCode::Assamese => assamese::WORDS,
        LanguageCode::Manipuri => manipuri::WORDS,
        // No curated Bodo list yet.
        LanguageCode::Bodo => &[],
    }
}

fn nfc(word: &str) -> String {
    word.nfc().collect()
}
