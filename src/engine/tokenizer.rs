//! Language-dispatched tokenizer.
//!
//! English goes through UAX #29 word boundaries with contraction splitting.
//! Indic languages go through the first available [`TokenStrategy`]. Any
//! failure resolves to a plain `\b\w+\b` split, so tokenization always
//! returns a sequence.

use regex::Regex;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::strategy::{StrategyKind, TokenStrategy};
use crate::resource::LazyResource;
use crate::types::{LanguageCode, TokenSequence, WordfreqError, WordfreqResult};

static ENGLISH_RULES: LazyResource<EnglishRules> = LazyResource::new("english word rules");
static WORD_PATTERN: LazyResource<Regex> = LazyResource::new("word fallback pattern");

/// How a token sequence was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizeMethod {
    EnglishWords,
    Grapheme,
    IndicTrivial,
    RegexLetters,
    /// The `\b\w+\b` split used for unknown languages and failures.
    RegexWords,
}

impl From<StrategyKind> for TokenizeMethod {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Grapheme => Self::Grapheme,
            StrategyKind::IndicTrivial => Self::IndicTrivial,
            StrategyKind::RegexLetters => Self::RegexLetters,
        }
    }
}

/// Tokens plus the method that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenization {
    pub tokens: TokenSequence,
    pub method: TokenizeMethod,
    /// True when the preferred path failed or the language was unknown.
    pub fallback_used: bool,
}

impl Tokenization {
    fn primary(tokens: TokenSequence, method: TokenizeMethod) -> Self {
        Self {
            tokens,
            method,
            fallback_used: false,
        }
    }

    fn fallback(text: &str) -> Self {
        Self {
            tokens: word_fallback(text),
            method: TokenizeMethod::RegexWords,
            fallback_used: true,
        }
    }

    fn empty(method: TokenizeMethod) -> Self {
        Self::primary(Vec::new(), method)
    }
}

/// Deterministic multilingual tokenizer. Immutable after construction.
pub struct Tokenizer {
    indic: Option<Box<dyn TokenStrategy>>,
}

impl Tokenizer {
    /// Create a tokenizer with the default Indic strategy order.
    pub fn new() -> Self {
        Self::with_strategies(&StrategyKind::DEFAULT_ORDER)
    }

    /// Create a tokenizer using the first available strategy from `order`.
    pub fn with_strategies(order: &[StrategyKind]) -> Self {
        let mut selected = None;
        for kind in order {
            match kind.build() {
                Ok(strategy) if strategy.is_available() => {
                    selected = Some(strategy);
                    break;
                }
                Ok(_) => log::warn!("Indic strategy {} unavailable", kind.name()),
                Err(e) => log::warn!("Indic strategy {} failed to load: {}", kind.name(), e),
            }
        }

        match &selected {
            Some(strategy) => log::info!("Selected Indic strategy: {}", strategy.kind().name()),
            None => log::warn!("No Indic strategy available, using word fallback"),
        }

        Self { indic: selected }
    }

    /// Create a tokenizer around a caller-supplied Indic strategy.
    ///
    /// An unavailable strategy leaves the tokenizer on the word fallback.
    pub fn with_strategy(strategy: Box<dyn TokenStrategy>) -> Self {
        if strategy.is_available() {
            log::info!("Selected Indic strategy: {}", strategy.kind().name());
            Self {
                indic: Some(strategy),
            }
        } else {
            log::warn!(
                "Indic strategy {} unavailable, using word fallback",
                strategy.kind().name()
            );
            Self { indic: None }
        }
    }

    /// The strategy used for Indic languages, if any is available.
    pub fn indic_strategy(&self) -> Option<StrategyKind> {
        self.indic.as_ref().map(|s| s.kind())
    }

    /// Tokenize text for a language.
    pub fn tokenize(&self, text: &str, lang: LanguageCode) -> TokenSequence {
        self.tokenize_detailed(text, lang).tokens
    }

    /// Tokenize text and report which method produced the tokens.
    pub fn tokenize_detailed(&self, text: &str, lang: LanguageCode) -> Tokenization {
        let result = if lang.is_indic() {
            self.tokenize_indic(text)
        } else {
            self.tokenize_english(text)
        };

        log::debug!(
            "Tokenized {} with {:?}: {:?}",
            lang,
            result.method,
            &result.tokens[..result.tokens.len().min(5)]
        );
        result
    }

    /// Tokenize with a raw language code. Unknown codes use the word fallback.
    pub fn tokenize_code(&self, text: &str, code: &str) -> Tokenization {
        match code.parse::<LanguageCode>() {
            Ok(lang) => self.tokenize_detailed(text, lang),
            Err(_) => {
                log::warn!("Using fallback tokenization for {}", code);
                Tokenization::fallback(text)
            }
        }
    }

    fn tokenize_english(&self, text: &str) -> Tokenization {
        if text.is_empty() {
            return Tokenization::empty(TokenizeMethod::EnglishWords);
        }

        let rules = match ENGLISH_RULES.get_or_try_load(EnglishRules::compile) {
            Ok(rules) => Ok(rules),
            Err(e) => {
                log::warn!("English word rules missing ({}), reloading", e);
                ENGLISH_RULES.get_or_try_load(EnglishRules::compile)
            }
        };

        match rules {
            Ok(rules) => Tokenization::primary(rules.tokenize(text), TokenizeMethod::EnglishWords),
            Err(e) => {
                log::error!("Error in tokenization: {}", e);
                Tokenization::fallback(text)
            }
        }
    }

    fn tokenize_indic(&self, text: &str) -> Tokenization {
        let Some(strategy) = &self.indic else {
            return Tokenization::fallback(text);
        };
        let method = TokenizeMethod::from(strategy.kind());
        if text.is_empty() {
            return Tokenization::empty(method);
        }

        // Callers may skip the normalizer.
        let composed: String = text.nfc().collect();
        match strategy.tokenize(&composed) {
            Ok(tokens) => Tokenization::primary(tokens, method),
            Err(e) => {
                log::error!("Error in tokenization: {}", e);
                Tokenization::fallback(&composed)
            }
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// English word rules
// ---------------------------------------------------------------------------

struct EnglishRules {
    /// Splits clitics off a word, Penn Treebank style: "can't" -> "ca" "n't".
    contraction: Regex,
}

impl EnglishRules {
    fn compile() -> WordfreqResult<Self> {
        let contraction = Regex::new(r"(?i)^(.+?)(n['’]t|['’](?:s|re|ve|ll|d|m))$").map_err(
            |e| WordfreqError::ResourceUnavailable {
                resource: "english word rules",
                reason: e.to_string(),
            },
        )?;
        Ok(Self { contraction })
    }

    /// Word-boundary segmentation keeping punctuation as separate tokens.
    fn tokenize(&self, text: &str) -> TokenSequence {
        let mut tokens = Vec::new();
        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }
            match self.contraction.captures(segment) {
                Some(caps) => {
                    tokens.push(caps[1].to_string());
                    tokens.push(caps[2].to_string());
                }
                None => tokens.push(segment.to_string()),
            }
        }
        tokens
    }
}

// ---------------------------------------------------------------------------
// Word fallback
// ---------------------------------------------------------------------------

/// Split into `\b\w+\b` runs; whitespace split if the pattern cannot load.
pub fn word_fallback(text: &str) -> TokenSequence {
    let pattern = WORD_PATTERN.get_or_try_load(|| {
        Regex::new(r"\b\w+\b").map_err(|e| WordfreqError::ResourceUnavailable {
            resource: "word fallback pattern",
            reason: e.to_string(),
        })
    });

    match pattern {
        Ok(re) => re.find_iter(text).map(|m| m.as_str().to_string()).collect(),
        Err(e) => {
            log::error!("{}; splitting on whitespace", e);
            text.split_whitespace().map(str::to_string).collect()
        }
    }
}
