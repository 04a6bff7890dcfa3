//! Supported languages and the per-language lookups the presentation layer needs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::WordfreqError;

/// A supported language. Selects normalization, tokenization, and stopword behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    English,
    Hindi,
    Assamese,
    Manipuri,
    /// Placeholder awaiting curated data; shares the generic Indic path.
    Bodo,
}

impl LanguageCode {
    /// Every supported language, in presentation order.
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::English,
        LanguageCode::Hindi,
        LanguageCode::Assamese,
        LanguageCode::Manipuri,
        LanguageCode::Bodo,
    ];

    /// The lowercase wire code, e.g. `"hindi"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Assamese => "assamese",
            Self::Manipuri => "manipuri",
            Self::Bodo => "bodo",
        }
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Assamese => "Assamese",
            Self::Manipuri => "Manipuri",
            Self::Bodo => "Bodo",
        }
    }

    /// Whether the language takes the Indic tokenization path.
    pub fn is_indic(self) -> bool {
        !matches!(self, Self::English)
    }

    /// Font file relative to the font root. English renders with the default font.
    pub fn font_file(self) -> Option<&'static str> {
        match self {
            Self::English => None,
            Self::Hindi | Self::Bodo => {
                Some("Noto_Sans_Devanagari/static/NotoSansDevanagari-Regular.ttf")
            }
            Self::Assamese => Some("Noto_Sans_Bengali/static/NotoSansBengali-Regular.ttf"),
            Self::Manipuri => {
                Some("Noto_Sans_Meetei_Mayek/static/NotoSansMeeteiMayek-Regular.ttf")
            }
        }
    }

    /// Resolve the font file under `root`, returning it only if it exists on disk.
    pub fn resolve_font(self, root: &Path) -> Option<PathBuf> {
        let relative = self.font_file()?;
        let path = root.join(relative);
        if path.exists() {
            log::info!("Using font {} for {}", path.display(), self);
            Some(path)
        } else {
            log::warn!(
                "Font for {} not found at {}, using default",
                self,
                path.display()
            );
            None
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = WordfreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(needle))
            .ok_or_else(|| WordfreqError::UnknownLanguage(s.to_string()))
    }
}
