//! Widgets module
//!
//! Geometry helpers shared by the overlay renderers.

pub mod popup;
