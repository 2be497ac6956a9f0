//! App module
//!
//! Ties the pieces together for the interactive front-end: the search box
//! with its dropdown, the routed pages, the header and footer chrome, and
//! the worker that talks to the glossary API.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_hover;

pub use app_state::{App, Focus};
