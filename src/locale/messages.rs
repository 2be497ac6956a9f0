//! Localized string tables
//!
//! Tables are embedded at build time, one TOML file per language, and
//! flattened to dotted keys (`home.search.placeholder`).

use std::collections::HashMap;

use toml::Value;

use super::Language;
use crate::error::GlossaError;

const VI_TABLE: &str = include_str!("../../messages/vi.toml");
const EN_TABLE: &str = include_str!("../../messages/en.toml");
const LO_TABLE: &str = include_str!("../../messages/lo.toml");

/// String table for one language
#[derive(Debug, Clone)]
pub struct Messages {
    language: Language,
    entries: HashMap<String, String>,
}

impl Messages {
    /// Load the embedded table for a language
    pub fn load(language: Language) -> Result<Self, GlossaError> {
        let source = match language {
            Language::Vi => VI_TABLE,
            Language::En => EN_TABLE,
            Language::Lo => LO_TABLE,
        };
        Self::parse(language, source)
    }

    /// Parse a TOML table, flattening nested sections into dotted keys
    pub fn parse(language: Language, source: &str) -> Result<Self, GlossaError> {
        let table: toml::Table = toml::from_str(source).map_err(|e| GlossaError::Config {
            path: format!("messages/{}.toml", language.code()),
            message: e.to_string(),
        })?;

        let mut entries = HashMap::new();
        flatten_into(&mut entries, "", &table);

        Ok(Self { language, entries })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a key; missing keys render as the key itself
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(value) => value.as_str(),
            None => {
                log::debug!("Missing {} message for key {}", self.language, key);
                key
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: &str, table: &toml::Table) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Table(nested) => flatten_into(entries, &full_key, nested),
            Value::String(text) => {
                entries.insert(full_key, text.clone());
            }
            other => {
                entries.insert(full_key, other.to_string());
            }
        }
    }
}
