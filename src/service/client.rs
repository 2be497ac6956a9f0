//! Glossary API client
//!
//! JSON over HTTP with reqwest. The bearer token, when present, is attached
//! to every request. It is read per request, so clearing it after a 401
//! takes effect for everything dispatched afterwards.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::{GlossaryApi, SearchResponse, ServiceError};
use crate::config::ApiConfig;
use crate::error::GlossaError;
use crate::locale::Language;
use crate::suggest::Suggestion;

const SUGGESTIONS_PATH: &str = "/terms/suggestions";
const SEARCH_PATH: &str = "/terms/search";

#[derive(Debug, Clone)]
pub struct GlossaryClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl GlossaryClient {
    pub fn new(config: &ApiConfig, token: Option<String>) -> Result<Self, GlossaError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GlossaError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(usable_token(token))),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.current_token().is_some()
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    pub fn suggestions_url(&self, query: &str, language: Language) -> String {
        format!(
            "{}{}?q={}&lang={}",
            self.base_url,
            SUGGESTIONS_PATH,
            urlencoding::encode(query),
            language.code()
        )
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}?q={}",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(query)
        )
    }

    async fn get_body(&self, url: String) -> Result<String, ServiceError> {
        let mut request = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(token) = self.current_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        Ok(body)
    }
}

impl GlossaryApi for GlossaryClient {
    fn suggestions<'a>(
        &'a self,
        query: &'a str,
        language: Language,
    ) -> BoxFuture<'a, Result<Vec<Suggestion>, ServiceError>> {
        Box::pin(async move {
            let body = self.get_body(self.suggestions_url(query, language)).await?;
            decode_suggestions(&body)
        })
    }

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchResponse, ServiceError>> {
        Box::pin(async move {
            let body = self.get_body(self.search_url(query)).await?;
            decode_search(&body)
        })
    }

    fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut slot) => *slot = usable_token(token),
            Err(e) => log::warn!("Token lock poisoned, keeping the old token: {}", e),
        }
    }
}

fn usable_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

fn transport_error(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::Timeout
    } else if e.is_decode() {
        ServiceError::Parse(e.to_string())
    } else {
        ServiceError::Network(e.to_string())
    }
}

/// Map a non-2xx status (and its body) to a [`ServiceError`]
pub fn status_error(code: u16, body: &str) -> ServiceError {
    match code {
        401 => ServiceError::Unauthorized,
        403 => ServiceError::Forbidden,
        404 => ServiceError::NotFound,
        500..=599 => ServiceError::Server { code },
        _ => ServiceError::Api {
            code,
            message: body_message(body).unwrap_or_default(),
        },
    }
}

/// The `message` field of a JSON error body
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

pub fn decode_suggestions(body: &str) -> Result<Vec<Suggestion>, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))
}

pub fn decode_search(body: &str) -> Result<SearchResponse, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
