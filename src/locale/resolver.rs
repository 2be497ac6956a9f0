//! Display-text resolution for multilingual bundles
//!
//! The fallback chain is fixed: preferred language, then English, then
//! Vietnamese, then Lao. Vietnamese and Lao are never swapped based on the
//! preference, so `{vi, lo}` with preference `lo` absent still yields `vi`.

use super::Language;
use crate::terms::{Definition, TermText};

/// Languages tried after the preferred one, in order
const FALLBACK_CHAIN: [Language; 3] = [Language::En, Language::Vi, Language::Lo];

/// Pick the one string to display for a bundle
///
/// Returns an empty string when no language carries non-empty text.
pub fn resolve_text(bundle: &TermText, preferred: Language) -> &str {
    std::iter::once(preferred)
        .chain(FALLBACK_CHAIN)
        .find_map(|lang| bundle.get(lang))
        .unwrap_or("")
}

/// Pick the definition to display: the preferred language, else Vietnamese
pub fn resolve_definition(definitions: &[Definition], preferred: Language) -> Option<&Definition> {
    definitions
        .iter()
        .find(|def| def.language == preferred.code())
        .or_else(|| {
            definitions
                .iter()
                .find(|def| def.language == Language::Vi.code())
        })
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
