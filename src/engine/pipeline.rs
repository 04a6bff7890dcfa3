//! The per-request pipeline: normalize, tokenize, filter, rank.

use serde::Serialize;

use super::filter::filter_tokens;
use super::frequency::rank;
use super::normalizer::normalize;
use super::tokenizer::{TokenizeMethod, Tokenizer};
use crate::config::PipelineConfig;
use crate::stopwords::StopwordRepository;
use crate::types::{LanguageCode, RankedFrequencyList, TokenSequence, WordfreqResult};

/// Everything one analysis produced, for display and diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub language: LanguageCode,
    /// Text after normalization.
    pub normalized: String,
    /// Tokens before stopword and length filtering.
    pub tokens: TokenSequence,
    /// Tokens that survived filtering.
    pub filtered: TokenSequence,
    pub ranked: RankedFrequencyList,
    pub method: TokenizeMethod,
    pub fallback_used: bool,
    pub token_count: usize,
    pub filtered_count: usize,
    pub unique_count: usize,
}

impl AnalysisReport {
    /// True when nothing survived filtering. Not an error; the caller decides
    /// how to tell the user.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// An immutable, shareable pipeline. Every call allocates its own results.
pub struct Pipeline {
    config: PipelineConfig,
    stopwords: StopwordRepository,
    tokenizer: Tokenizer,
}

impl Pipeline {
    /// Build a pipeline from a validated config.
    pub fn new(config: PipelineConfig) -> WordfreqResult<Self> {
        config.validate()?;
        let stopwords = config.stopwords();
        let tokenizer = Tokenizer::with_strategies(&config.indic_strategies);
        Ok(Self {
            config,
            stopwords,
            tokenizer,
        })
    }

    /// Build a pipeline around an explicit stopword repository.
    pub fn with_stopwords(
        config: PipelineConfig,
        stopwords: StopwordRepository,
    ) -> WordfreqResult<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::with_strategies(&config.indic_strategies);
        Ok(Self {
            config,
            stopwords,
            tokenizer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordRepository {
        &self.stopwords
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize(text)
    }

    pub fn tokenize(&self, text: &str, lang: LanguageCode) -> TokenSequence {
        self.tokenizer.tokenize(text, lang)
    }

    /// Remove stopwords for `lang` and tokens below the minimum length.
    pub fn filter(&self, tokens: &[String], lang: LanguageCode) -> TokenSequence {
        filter_tokens(
            tokens,
            self.stopwords.get(lang),
            self.config.min_token_chars,
        )
    }

    /// Filter with a raw language code. Unknown codes apply only the length rule.
    pub fn filter_code(&self, tokens: &[String], code: &str) -> TokenSequence {
        let stopwords = match code.parse::<LanguageCode>() {
            Ok(lang) => self.stopwords.get(lang),
            Err(_) => {
                log::warn!("No stopwords registered for {}", code);
                None
            }
        };
        filter_tokens(tokens, stopwords, self.config.min_token_chars)
    }

    pub fn rank(&self, tokens: &[String], top_n: usize) -> RankedFrequencyList {
        rank(tokens, top_n)
    }

    /// Run the full pipeline on one text.
    pub fn analyze(&self, text: &str, lang: LanguageCode, top_n: usize) -> AnalysisReport {
        let normalized = self.normalize(text);
        let tokenization = self.tokenizer.tokenize_detailed(&normalized, lang);
        let filtered = self.filter(&tokenization.tokens, lang);
        let ranked = self.rank(&filtered, top_n);
        let unique_count = super::frequency::count(&filtered).len();

        if filtered.is_empty() {
            log::warn!("No valid tokens left after filtering for {}", lang);
        }

        AnalysisReport {
            language: lang,
            normalized,
            token_count: tokenization.tokens.len(),
            filtered_count: filtered.len(),
            unique_count,
            tokens: tokenization.tokens,
            filtered,
            ranked,
            method: tokenization.method,
            fallback_used: tokenization.fallback_used,
        }
    }

    /// Run the full pipeline with the configured `top_n`.
    pub fn analyze_default(&self, text: &str, lang: LanguageCode) -> AnalysisReport {
        self.analyze(text, lang, self.config.top_n)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            config: PipelineConfig::default(),
            stopwords: StopwordRepository::global().clone(),
            tokenizer: Tokenizer::new(),
        }
    }
}
