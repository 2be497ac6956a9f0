//! Results module
//!
//! The full-text search results page: the list of matching terms as cards,
//! a cursor over them and the local favourite marks.

pub mod results_events;
pub mod results_render;
pub mod results_state;

pub use results_state::ResultsState;
