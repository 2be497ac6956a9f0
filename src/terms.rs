//! Terms module
//!
//! The glossary term model returned by the API and the card view model used
//! to present a term in result lists and on the detail page.

pub mod card;
pub mod card_render;
pub mod term;

pub use card::{CardVariant, TermCard, format_count, truncate_text};
pub use term::{Definition, Level, Source, Term, TermMetadata, TermText};
