//! Locale module
//!
//! Language codes, the display-text fallback chain, locale-prefixed routing
//! and the localized string tables.

pub mod language;
pub mod messages;
pub mod resolver;
pub mod routing;

pub use language::Language;
pub use messages::Messages;
pub use resolver::{resolve_definition, resolve_text};
