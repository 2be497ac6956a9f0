//! Term card view model
//!
//! Everything a card shows, already resolved for the active language and
//! formatted, so the renderer only lays out strings.

use super::term::{Level, Source, Term};
use crate::locale::{Language, resolve_definition, resolve_text};

pub const COMPACT_DEFINITION_CHARS: usize = 120;
pub const FULL_DEFINITION_CHARS: usize = 200;
pub const MAX_CARD_TAGS: usize = 3;

const ELLIPSIS: &str = "...";

/// Abbreviate a count: `950`, `1.5k`, `2.3M`
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Cut `text` to `max_chars` characters, marking the cut with an ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    /// Result list entry: shorter definition, no tags
    #[default]
    Compact,
    /// Detail page
    Full,
}

impl CardVariant {
    pub fn definition_budget(self) -> usize {
        match self {
            CardVariant::Compact => COMPACT_DEFINITION_CHARS,
            CardVariant::Full => FULL_DEFINITION_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCard {
    pub id: String,
    pub variant: CardVariant,
    pub title: String,
    pub category: Option<String>,
    /// Empty when no definition exists in the active language or Vietnamese
    pub definition: String,
    pub source: Option<Source>,
    pub level: Option<Level>,
    pub tags: Vec<String>,
    /// Tags beyond the first few, shown as `+N`
    pub hidden_tags: usize,
    pub views: String,
    pub favorites: String,
    /// Only present when the term has been searched at least once
    pub searches: Option<String>,
    pub is_favorite: bool,
}

impl TermCard {
    pub fn new(term: &Term, language: Language, variant: CardVariant, is_favorite: bool) -> Self {
        let definition = resolve_definition(&term.definitions, language);

        let (tags, hidden_tags) = match variant {
            CardVariant::Full => (
                term.tags.iter().take(MAX_CARD_TAGS).cloned().collect(),
                term.tags.len().saturating_sub(MAX_CARD_TAGS),
            ),
            CardVariant::Compact => (Vec::new(), 0),
        };

        let metadata = term.metadata;
        Self {
            id: term.id.clone(),
            variant,
            title: resolve_text(&term.term, language).to_string(),
            category: term.category_name.clone().filter(|name| !name.is_empty()),
            definition: definition
                .map(|d| truncate_text(&d.content, variant.definition_budget()))
                .unwrap_or_default(),
            source: definition.map(|d| d.source),
            level: definition.map(|d| d.level),
            tags,
            hidden_tags,
            views: format_count(metadata.views),
            favorites: format_count(metadata.favorites),
            searches: (metadata.search_count > 0).then(|| format_count(metadata.search_count)),
            is_favorite,
        }
    }

    /// Flip the local favourite flag, returning the new value
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Message key of the favourite action's label
    pub fn favorite_label_key(&self) -> &'static str {
        if self.is_favorite {
            "term.unfavorite"
        } else {
            "term.favorite"
        }
    }

    pub fn overflow_marker(&self) -> Option<String> {
        (self.hidden_tags > 0).then(|| format!("+{}", self.hidden_tags))
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod card_tests;
