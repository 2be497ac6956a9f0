use serde::{Deserialize, Serialize};

use crate::locale::{Language, resolve_text};
use crate::terms::TermText;

/// One entry of the suggestion dropdown, in server relevance order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub term: TermText,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, term: TermText) -> Self {
        Self {
            id: id.into(),
            term,
            category: String::new(),
            category_name: None,
        }
    }

    pub fn with_category(mut self, category: &str, name: Option<&str>) -> Self {
        self.category = category.to_string();
        self.category_name = name.map(str::to_string);
        self
    }

    /// Text to show for this suggestion in the given language
    pub fn title(&self, lang: Language) -> &str {
        resolve_text(&self.term, lang)
    }
}
