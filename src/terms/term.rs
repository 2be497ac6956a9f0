use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// Per-language text of a term; any language may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lo: Option<String>,
}

impl TermText {
    /// Text for one language, treating empty strings as missing
    pub fn get(&self, lang: Language) -> Option<&str> {
        let entry = match lang {
            Language::Vi => &self.vi,
            Language::En => &self.en,
            Language::Lo => &self.lo,
        };
        entry.as_deref().filter(|text| !text.is_empty())
    }

    pub fn with(mut self, lang: Language, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match lang {
            Language::Vi => self.vi = text,
            Language::En => self.en = text,
            Language::Lo => self.lo = text,
        }
        self
    }
}

/// How deep a definition goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn key(self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

/// Where a definition came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Manual,
    Ai,
    Contribution,
    Import,
}

impl Source {
    pub fn key(self) -> &'static str {
        match self {
            Source::Manual => "manual",
            Source::Ai => "ai",
            Source::Contribution => "contribution",
            Source::Import => "import",
        }
    }

    /// Single-glyph badge shown before the source label
    pub fn icon(self) -> &'static str {
        match self {
            Source::Manual => "📖",
            Source::Ai => "✨",
            Source::Contribution => "👥",
            Source::Import => "📄",
        }
    }
}

/// A definition written in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub language: String,
    pub content: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub source: Source,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermMetadata {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub search_count: u64,
}

/// A glossary term as returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub term: TermText,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub metadata: TermMetadata,
    #[serde(default)]
    pub tags: Vec<String>,
}
