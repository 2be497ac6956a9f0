//! Glossary service module
//!
//! The HTTP boundary to the glossary API: the [`GlossaryApi`] contract, its
//! reqwest-backed client, the outcome classification that swallows failures,
//! and the background worker the UI dispatches lookups to.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Language;
use crate::suggest::Suggestion;
use crate::terms::Term;

pub mod client;
pub mod outcome;
pub mod worker;

pub use client::GlossaryClient;
pub use outcome::{LookupOutcome, classify_lookup, classify_search};
pub use worker::{Worker, WorkerRequest, WorkerResponse};

/// Errors that can occur talking to the glossary API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No response from the server
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    /// Token missing, expired or rejected
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Server error ({code})")]
    Server { code: u16 },

    /// Any other non-2xx status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ServiceError {
    /// Human-readable description for the log
    pub fn describe(&self) -> String {
        match self {
            ServiceError::Unauthorized => "Session expired, please sign in again".to_string(),
            ServiceError::Forbidden => "You do not have access to this resource".to_string(),
            ServiceError::NotFound => "The resource does not exist".to_string(),
            ServiceError::Server { .. } => "Server error, please try again later".to_string(),
            ServiceError::Api { message, .. } if !message.is_empty() => message.clone(),
            ServiceError::Api { .. } => "Something went wrong, please try again".to_string(),
            ServiceError::Network(_) | ServiceError::Timeout => {
                "No response from the server, check your connection".to_string()
            }
            ServiceError::Parse(e) => format!("Unexpected response from the server: {}", e),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Unauthorized)
    }
}

/// One page of full-text search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl SearchResponse {
    /// What a failed search degrades to
    pub fn empty() -> Self {
        Self {
            terms: Vec::new(),
            total: 0,
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl Default for SearchResponse {
    fn default() -> Self {
        Self::empty()
    }
}

/// The glossary API as the rest of the crate sees it
pub trait GlossaryApi: Send + Sync {
    /// Suggestions for a partial query, in server relevance order
    fn suggestions<'a>(
        &'a self,
        query: &'a str,
        language: Language,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, ServiceError>>;

    /// Full-text search
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchResponse, ServiceError>>;

    /// Replace the bearer token sent with later requests
    fn set_token(&self, token: Option<String>);
}
