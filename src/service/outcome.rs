//! Outcome classification
//!
//! The only places where service failures are swallowed. A failed lookup
//! looks exactly like an empty one to the suggestion controller, and a failed
//! search looks like a search with no hits.

use super::{SearchResponse, ServiceError};
use crate::suggest::Suggestion;

/// What the suggestion controller gets back from a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Vec<Suggestion>),
    Empty,
}

impl LookupOutcome {
    pub fn len(&self) -> usize {
        match self {
            LookupOutcome::Found(list) => list.len(),
            LookupOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn log_failure(what: &str, query: &str, error: &ServiceError) {
    log::debug!("{} for {:?} failed: {} ({})", what, query, error, error.describe());
}

pub fn classify_lookup(query: &str, result: Result<Vec<Suggestion>, ServiceError>) -> LookupOutcome {
    match result {
        Ok(list) if !list.is_empty() => LookupOutcome::Found(list),
        Ok(_) => LookupOutcome::Empty,
        Err(e) => {
            log_failure("Suggestion lookup", query, &e);
            LookupOutcome::Empty
        }
    }
}

pub fn classify_search(query: &str, result: Result<SearchResponse, ServiceError>) -> SearchResponse {
    match result {
        Ok(response) => response,
        Err(e) => {
            log_failure("Search", query, &e);
            SearchResponse::empty()
        }
    }
}
