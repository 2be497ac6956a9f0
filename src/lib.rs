//! Multilingual glossary front-end
//!
//! Search-as-you-type over a glossary service with Vietnamese, English and
//! Lao content. The interaction core (debounced suggestions, stale-response
//! guard, keyboard policy, locale fallback) lives in plain modules; the
//! terminal front-end in [`app`] and the binary drive it.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod locale;
pub mod navigation;
pub mod results;
pub mod service;
pub mod session;
pub mod suggest;
pub mod terms;
pub mod widgets;
