// Configuration type definitions

use serde::Deserialize;

use crate::locale::Language;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// Glossary API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Search box behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub max_visible_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            max_visible_suggestions: DEFAULT_MAX_VISIBLE_SUGGESTIONS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub default: Language,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}
