//! Suggestion controller state
//!
//! Turns keystrokes into at most one debounced lookup at a time and keeps
//! the dropdown consistent with the most recently dispatched lookup.
//!
//! Phases:
//! - `Idle`: query shorter than the minimum, nothing pending
//! - `Debouncing`: timer pending for the current query
//! - `Loading`: lookup dispatched, waiting for its response
//! - `Shown` / `Empty`: latest response applied, dropdown open
//! - `Closed`: dropdown dismissed, list kept for reopening on focus

use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use super::selection::SelectionState;
use super::suggestion::Suggestion;
use crate::config::SearchConfig;
use crate::navigation::Navigator;
use crate::service::LookupOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestPhase {
    #[default]
    Idle,
    Debouncing,
    Loading,
    Shown,
    Empty,
    Closed,
}

/// A lookup the controller wants dispatched
///
/// The `request_id` must come back with the response; anything tagged with
/// an older id is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub request_id: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SuggestState {
    query: String,
    suggestions: Vec<Suggestion>,
    phase: SuggestPhase,
    selection: SelectionState,
    debouncer: Debouncer<String>,
    min_query_len: usize,
    /// Tag of the most recently dispatched lookup
    request_id: u64,
    /// Tag of the lookup whose response is still wanted
    in_flight_request_id: Option<u64>,
}

impl SuggestState {
    pub fn new(debounce_ms: u64, min_query_len: usize) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            phase: SuggestPhase::Idle,
            selection: SelectionState::new(),
            debouncer: Debouncer::new(debounce_ms),
            min_query_len,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.debounce_ms, config.min_query_len)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn phase(&self) -> SuggestPhase {
        self.phase
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get_selected()
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected_index()
            .and_then(|idx| self.suggestions.get(idx))
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SuggestPhase::Loading
    }

    /// Dropdown is visible, either with items or with the "no results" line
    pub fn is_open(&self) -> bool {
        matches!(self.phase, SuggestPhase::Shown | SuggestPhase::Empty)
    }

    /// Dropdown is visible with items; keyboard navigation is active
    pub fn is_showing_list(&self) -> bool {
        self.phase == SuggestPhase::Shown && !self.suggestions.is_empty()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    fn trimmed_len(text: &str) -> usize {
        text.trim().chars().count()
    }

    /// Record new query text, restarting the debounce window
    pub fn set_query(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();

        if Self::trimmed_len(text) < self.min_query_len {
            self.reset_to_idle();
            return;
        }

        self.debouncer.schedule_after(now, self.query.trim().to_string());
        self.phase = SuggestPhase::Debouncing;
    }

    /// Re-run the lookup for the current query (e.g. after a language change)
    pub fn refresh(&mut self, now: Instant) {
        if Self::trimmed_len(&self.query) >= self.min_query_len {
            let query = self.query.clone();
            self.set_query(&query, now);
        }
    }

    /// Advance the timer; returns the lookup to dispatch when it fires
    pub fn tick(&mut self, now: Instant) -> Option<LookupTicket> {
        let query = self.debouncer.poll(now)?;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        self.phase = SuggestPhase::Loading;
        log::debug!("Dispatching suggestion lookup {} for {:?}", self.request_id, query);
        Some(LookupTicket {
            request_id: self.request_id,
            query,
        })
    }

    /// Time until the debounce timer fires, if one is pending
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    /// Apply a lookup response; returns false when it was stale and dropped
    pub fn apply_lookup(&mut self, request_id: u64, outcome: LookupOutcome) -> bool {
        if self.in_flight_request_id != Some(request_id) || self.phase != SuggestPhase::Loading {
            log::debug!(
                "Discarding stale suggestion response {} (current {})",
                request_id,
                self.request_id
            );
            return false;
        }

        self.in_flight_request_id = None;
        self.selection.clear_selection();
        match outcome {
            LookupOutcome::Found(list) if !list.is_empty() => {
                self.suggestions = list;
                self.phase = SuggestPhase::Shown;
            }
            _ => {
                self.suggestions.clear();
                self.phase = SuggestPhase::Empty;
            }
        }
        true
    }

    pub fn navigate_next(&mut self) {
        if self.is_showing_list() {
            self.selection.navigate_next(self.suggestions.len());
        }
    }

    pub fn navigate_previous(&mut self) {
        if self.is_showing_list() {
            self.selection.navigate_previous(self.suggestions.len());
        }
    }

    /// Highlight an item under the pointer
    pub fn highlight(&mut self, index: usize) {
        if self.is_showing_list() {
            self.selection.select_index(index, self.suggestions.len());
        }
    }

    /// Hand the typed query to the results page
    ///
    /// No-op (returns false) when the trimmed query is empty.
    pub fn submit_search(&mut self, navigator: &mut dyn Navigator) -> bool {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            return false;
        }

        self.debouncer.cancel();
        self.in_flight_request_id = None;
        if self.phase != SuggestPhase::Idle {
            self.phase = SuggestPhase::Closed;
        }
        self.selection.clear_selection();
        navigator.go_to_search_results(&query);
        true
    }

    /// Open the detail page of a suggestion from the current list
    ///
    /// Items not in the list are rejected. The query is cleared.
    pub fn select_suggestion(&mut self, item: &Suggestion, navigator: &mut dyn Navigator) -> bool {
        if !self.suggestions.iter().any(|s| s.id == item.id) {
            log::debug!("Ignoring selection of unknown suggestion {}", item.id);
            return false;
        }

        let id = item.id.clone();
        self.query.clear();
        self.suggestions.clear();
        self.debouncer.cancel();
        self.in_flight_request_id = None;
        self.selection.clear_selection();
        self.phase = SuggestPhase::Closed;
        navigator.go_to_term_detail(&id);
        true
    }

    /// Select the highlighted suggestion, if any
    pub fn select_highlighted(&mut self, navigator: &mut dyn Navigator) -> bool {
        match self.selected().cloned() {
            Some(item) => self.select_suggestion(&item, navigator),
            None => false,
        }
    }

    /// Close the dropdown (Escape, outside click); the query is kept
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.phase = SuggestPhase::Closed;
        }
        self.selection.clear_selection();
    }

    /// Input regained focus: reopen a kept list without fetching again
    pub fn focus(&mut self) -> bool {
        if self.phase == SuggestPhase::Closed && !self.suggestions.is_empty() {
            self.phase = SuggestPhase::Shown;
            return true;
        }
        false
    }

    /// Clear button: empty query, empty list, back to idle
    pub fn clear(&mut self) {
        self.query.clear();
        self.reset_to_idle();
    }

    fn reset_to_idle(&mut self) {
        self.debouncer.cancel();
        self.in_flight_request_id = None;
        self.suggestions.clear();
        self.selection.clear_selection();
        self.phase = SuggestPhase::Idle;
    }
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
