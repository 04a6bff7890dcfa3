//! Text normalization shared by every language.
//!
//! Joiners are dropped before NFC, then case folding, danda unification,
//! punctuation replacement and whitespace collapsing run in that order. The
//! collapsed result is recomposed, so output is always NFC and a second pass
//! is a no-op.

use unicode_normalization::UnicodeNormalization;

const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';
const DEVANAGARI_DANDA: char = '\u{0964}';

/// Normalize raw text into a single-spaced, punctuation-free string.
///
/// Never fails; characters outside the handled classes pass through unchanged.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let composed: String = text
        .chars()
        .filter(|&c| c != ZERO_WIDTH_NON_JOINER && c != ZERO_WIDTH_JOINER)
        .nfc()
        .collect();
    let lowered = composed.to_lowercase();

    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        match c {
            // Danda unifies to '.', which is punctuation and becomes a space.
            DEVANAGARI_DANDA => cleaned.push(' '),
            c if is_ascii_punctuation(c) || is_unicode_punctuation(c) => cleaned.push(' '),
            c => cleaned.push(c),
        }
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ").nfc().collect()
}

/// Normalize optional text; `None` yields an empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// The fixed ASCII punctuation set `` !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~ ``.
fn is_ascii_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// General punctuation, supplemental punctuation, and CJK symbols blocks.
fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{2000}'..='\u{206F}' | '\u{2E00}'..='\u{2E7F}' | '\u{3000}'..='\u{303F}'
    )
}
