//! Pipeline configuration, loadable from TOML.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::strategy::StrategyKind;
use crate::stopwords::StopwordRepository;
use crate::types::{LanguageCode, WordfreqError, WordfreqResult};

/// Default number of ranked entries.
pub const DEFAULT_TOP_N: usize = 20;
/// Smallest `top_n` the presentation layer offers.
pub const MIN_TOP_N: usize = 5;
/// Largest `top_n` the presentation layer offers.
pub const MAX_TOP_N: usize = 50;
/// Tokens shorter than this many characters are dropped by the filter.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;

/// Immutable settings passed into [`Pipeline`](crate::Pipeline).
///
/// ```toml
/// top_n = 30
/// min_token_chars = 2
/// indic_strategies = ["grapheme", "regex_letters"]
/// font_root = "assets/fonts"
///
/// [extra_stopwords]
/// english = ["data"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of ranked entries returned by `analyze`.
    pub top_n: usize,
    /// Minimum token length in characters.
    pub min_token_chars: usize,
    /// Indic tokenization strategies, most capable first. Leaving one out
    /// treats it as unavailable.
    pub indic_strategies: Vec<StrategyKind>,
    /// Directory holding the per-language font families.
    pub font_root: PathBuf,
    /// Additional stopwords merged into the built-in lists.
    pub extra_stopwords: BTreeMap<LanguageCode, Vec<String>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
            indic_strategies: StrategyKind::DEFAULT_ORDER.to_vec(),
            font_root: PathBuf::from("fonts"),
            extra_stopwords: BTreeMap::new(),
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> WordfreqResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> WordfreqResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::info!("Loaded pipeline config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> WordfreqResult<()> {
        if !(MIN_TOP_N..=MAX_TOP_N).contains(&self.top_n) {
            return Err(WordfreqError::Config(format!(
                "top_n must be between {} and {}, got {}",
                MIN_TOP_N, MAX_TOP_N, self.top_n
            )));
        }
        if self.min_token_chars == 0 {
            return Err(WordfreqError::Config(
                "min_token_chars must be at least 1".to_string(),
            ));
        }
        if self.indic_strategies.is_empty() {
            return Err(WordfreqError::Config(
                "indic_strategies must name at least one strategy".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the stopword repository this config describes.
    ///
    /// Without extra stopwords this is a copy of the shared built-in repository.
    pub fn stopwords(&self) -> StopwordRepository {
        self.extra_stopwords.iter().fold(
            StopwordRepository::global().clone(),
            |repo, (lang, words)| repo.with_extra(*lang, words),
        )
    }
}
