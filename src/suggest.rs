//! Suggest module
//!
//! The search box's suggestion dropdown: debounced lookups, stale-response
//! filtering, keyboard selection and popup rendering.

pub mod debouncer;
pub mod selection;
pub mod suggest_events;
pub mod suggest_render;
pub mod suggest_state;
pub mod suggestion;

pub use debouncer::{CancelHandle, Debouncer};
pub use selection::SelectionState;
pub use suggest_state::{LookupTicket, SuggestPhase, SuggestState};
pub use suggestion::Suggestion;
