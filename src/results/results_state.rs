use std::collections::HashSet;

use crate::service::SearchResponse;
use crate::terms::Term;

/// State of the search results page
///
/// Searches are tagged with a request id the same way suggestion lookups
/// are; a response for anything but the latest search is dropped.
#[derive(Debug, Default)]
pub struct ResultsState {
    query: String,
    terms: Vec<Term>,
    total: u64,
    loading: bool,
    cursor: usize,
    favorites: HashSet<String>,
    request_id: u64,
    in_flight_request_id: Option<u64>,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Finished search with nothing to show
    pub fn has_no_results(&self) -> bool {
        !self.loading && !self.query.is_empty() && self.terms.is_empty()
    }

    /// Start a search for `query`; returns the id to tag the request with
    pub fn begin_search(&mut self, query: &str) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        self.query = query.to_string();
        self.terms.clear();
        self.total = 0;
        self.cursor = 0;
        self.loading = true;
        self.request_id
    }

    /// Apply a search response; returns false when it was stale
    pub fn apply_search(&mut self, request_id: u64, response: SearchResponse) -> bool {
        if self.in_flight_request_id != Some(request_id) {
            log::debug!(
                "Discarding stale search response {} (current {})",
                request_id,
                self.request_id
            );
            return false;
        }

        self.in_flight_request_id = None;
        self.loading = false;
        self.total = response.total;
        self.terms = response.terms;
        self.cursor = 0;
        true
    }

    /// Forget the page, e.g. when leaving it
    pub fn reset(&mut self) {
        self.query.clear();
        self.terms.clear();
        self.total = 0;
        self.cursor = 0;
        self.loading = false;
        self.in_flight_request_id = None;
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.terms.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_to(&mut self, index: usize) {
        if index < self.terms.len() {
            self.cursor = index;
        }
    }

    pub fn selected_term(&self) -> Option<&Term> {
        self.terms.get(self.cursor)
    }

    pub fn find_term(&self, id: &str) -> Option<&Term> {
        self.terms.iter().find(|term| term.id == id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Flip the favourite mark of the term under the cursor
    ///
    /// Returns the new state, or None when the page is empty.
    pub fn toggle_favorite(&mut self) -> Option<bool> {
        let id = self.selected_term()?.id.clone();
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id.clone());
            true
        };
        log::debug!("Term {} favourite: {}", id, now_favorite);
        Some(now_favorite)
    }
}

#[cfg(test)]
#[path = "results_state_tests.rs"]
mod results_state_tests;
