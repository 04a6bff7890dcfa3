//! Indic tokenization strategies, most capable first.
//!
//! Each strategy reports whether its capability is usable; the tokenizer picks
//! the first available one when it is constructed.

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::types::{TokenSequence, WordfreqError, WordfreqResult};

/// Identifies a strategy in configuration and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Whitespace units kept cluster-correct via extended grapheme clusters.
    Grapheme,
    /// Whitespace, script-boundary, and punctuation splitting.
    IndicTrivial,
    /// Maximal runs of Unicode letters.
    RegexLetters,
}

impl StrategyKind {
    pub const DEFAULT_ORDER: [StrategyKind; 3] = [
        StrategyKind::Grapheme,
        StrategyKind::IndicTrivial,
        StrategyKind::RegexLetters,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Grapheme => "grapheme",
            Self::IndicTrivial => "indic_trivial",
            Self::RegexLetters => "regex_letters",
        }
    }

    /// Construct the strategy implementation.
    pub fn build(self) -> WordfreqResult<Box<dyn TokenStrategy>> {
        Ok(match self {
            Self::Grapheme => Box::new(GraphemeStrategy),
            Self::IndicTrivial => Box::new(IndicTrivialStrategy),
            Self::RegexLetters => Box::new(RegexLettersStrategy::new()?),
        })
    }
}

/// One way of segmenting Indic text.
pub trait TokenStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Whether the capability behind this strategy works in this build.
    fn is_available(&self) -> bool;

    /// Segment NFC text into tokens in appearance order.
    fn tokenize(&self, text: &str) -> WordfreqResult<TokenSequence>;
}

// ---------------------------------------------------------------------------
// Grapheme clusters
// ---------------------------------------------------------------------------

pub struct GraphemeStrategy;

impl TokenStrategy for GraphemeStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Grapheme
    }

    fn is_available(&self) -> bool {
        // KA + VOWEL SIGN I must form a single cluster.
        "\u{0915}\u{093F}".graphemes(true).count() == 1
    }

    fn tokenize(&self, text: &str) -> WordfreqResult<TokenSequence> {
        let tokens = text
            .split_whitespace()
            .map(|unit| unit.graphemes(true).collect::<String>())
            .collect();
        Ok(tokens)
    }
}

// ---------------------------------------------------------------------------
// Script-boundary splitting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Devanagari,
    Bengali,
    MeeteiMayek,
    Digit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Punctuation,
    /// Combining marks outside any script block attach to the preceding run.
    Inherited,
    Script(Script),
}

impl CharClass {
    fn of(c: char) -> Self {
        match c {
            c if c.is_ascii_punctuation() => Self::Punctuation,
            // Danda, double danda, abbreviation sign, Meetei Mayek cheikhei and ahang khudam.
            '\u{0964}' | '\u{0965}' | '\u{0970}' | '\u{ABEB}' | '\u{AAF0}' | '\u{AAF1}' => {
                Self::Punctuation
            }
            '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{20D0}'..='\u{20FF}' => {
                Self::Inherited
            }
            '\u{0900}'..='\u{097F}' | '\u{A8E0}'..='\u{A8FF}' => Self::Script(Script::Devanagari),
            '\u{0980}'..='\u{09FF}' => Self::Script(Script::Bengali),
            '\u{ABC0}'..='\u{ABFF}' | '\u{AAE0}'..='\u{AAFF}' => {
                Self::Script(Script::MeeteiMayek)
            }
            c if c.is_numeric() => Self::Script(Script::Digit),
            c if c.is_ascii_alphabetic() || ('\u{00C0}'..='\u{024F}').contains(&c) => {
                Self::Script(Script::Latin)
            }
            _ => Self::Script(Script::Other),
        }
    }
}

pub struct IndicTrivialStrategy;

impl TokenStrategy for IndicTrivialStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::IndicTrivial
    }

    fn is_available(&self) -> bool {
        true
    }

    fn tokenize(&self, text: &str) -> WordfreqResult<TokenSequence> {
        let mut tokens = Vec::new();
        for unit in text.split_whitespace() {
            let mut run = String::new();
            let mut run_script: Option<Script> = None;

            for c in unit.chars() {
                match CharClass::of(c) {
                    CharClass::Punctuation => {
                        flush(&mut run, &mut tokens);
                        run_script = None;
                        tokens.push(c.to_string());
                    }
                    CharClass::Inherited => run.push(c),
                    CharClass::Script(script) => {
                        if run_script.is_some_and(|current| current != script) {
                            flush(&mut run, &mut tokens);
                        }
                        run_script = Some(script);
                        run.push(c);
                    }
                }
            }
            flush(&mut run, &mut tokens);
        }
        Ok(tokens)
    }
}

fn flush(run: &mut String, tokens: &mut TokenSequence) {
    if !run.is_empty() {
        tokens.push(std::mem::take(run));
    }
}

// ---------------------------------------------------------------------------
// Letter runs
// ---------------------------------------------------------------------------

pub struct RegexLettersStrategy {
    letters: Regex,
}

impl RegexLettersStrategy {
    pub fn new() -> WordfreqResult<Self> {
        let letters = Regex::new(r"\p{L}+").map_err(|e| WordfreqError::ResourceUnavailable {
            resource: "letter-run pattern",
            reason: e.to_string(),
        })?;
        Ok(Self { letters })
    }
}

impl TokenStrategy for RegexLettersStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RegexLetters
    }

    fn is_available(&self) -> bool {
        true
    }

    fn tokenize(&self, text: &str) -> WordfreqResult<TokenSequence> {
        Ok(self
            .letters
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }
}
