use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GlossaError;

/// A language the glossary carries text for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vi,
    En,
    Lo,
}

impl Language {
    /// Every supported language, in switcher order
    pub const SUPPORTED: [Language; 3] = [Language::Vi, Language::En, Language::Lo];

    /// Language used when a path carries no locale prefix
    pub const DEFAULT: Language = Language::Vi;

    pub fn code(self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
            Language::Lo => "lo",
        }
    }

    /// Name of the language written in that language (switcher label)
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Vi => "Tiếng Việt",
            Language::En => "English",
            Language::Lo => "ລາວ",
        }
    }

    /// Next language in switcher order, wrapping around
    pub fn next(self) -> Language {
        let idx = Self::SUPPORTED
            .iter()
            .position(|lang| *lang == self)
            .unwrap_or(0);
        Self::SUPPORTED[(idx + 1) % Self::SUPPORTED.len()]
    }

    /// Parse a code, returning None for anything outside the closed set
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "vi" => Some(Language::Vi),
            "en" => Some(Language::En),
            "lo" => Some(Language::Lo),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GlossaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| GlossaError::UnsupportedLanguage(s.to_string()))
    }
}
