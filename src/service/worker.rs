//! Glossary worker thread
//!
//! Runs API calls on a background thread so the UI never blocks. Requests
//! arrive over a tokio channel and each one runs as its own task, so
//! responses can come back in any order. Every response carries the request
//! id it was dispatched with; the UI decides what is stale. Token changes
//! run inline, so they land before anything queued after them.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::outcome::{LookupOutcome, classify_lookup, classify_search};
use super::{GlossaryApi, SearchResponse, ServiceError};
use crate::locale::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerRequest {
    Lookup {
        request_id: u64,
        query: String,
        language: Language,
    },
    Search {
        request_id: u64,
        query: String,
    },
    /// Applied before any request queued after it
    SetToken { token: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    Lookup {
        request_id: u64,
        outcome: LookupOutcome,
    },
    Search {
        request_id: u64,
        response: SearchResponse,
    },
    /// The API rejected the stored token
    SessionExpired,
}

/// Handle to the worker thread; dropping it shuts the worker down
pub struct Worker {
    request_tx: UnboundedSender<WorkerRequest>,
    response_rx: Receiver<WorkerResponse>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn spawn(api: Arc<dyn GlossaryApi>) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let cancel = CancellationToken::new();

        let token = cancel.clone();
        let handle = std::thread::spawn(move || {
            worker_loop(api, request_rx, response_tx, token);
        });

        Self {
            request_tx,
            response_rx,
            cancel,
            handle: Some(handle),
        }
    }

    /// Queue a request; returns false when the worker is gone
    pub fn dispatch(&self, request: WorkerRequest) -> bool {
        match self.request_tx.send(request) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Glossary worker is not running, dropped {:?}", e.0);
                false
            }
        }
    }

    /// Next finished response, without blocking
    pub fn try_recv(&self) -> Option<WorkerResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until a response arrives or the timeout elapses
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<WorkerResponse> {
        self.response_rx.recv_timeout(timeout).ok()
    }

    /// Stop accepting requests and abandon the ones in flight
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Glossary worker thread panicked");
            }
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(
    api: Arc<dyn GlossaryApi>,
    mut request_rx: UnboundedReceiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
    cancel: CancellationToken,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start glossary worker runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                request = request_rx.recv() => match request {
                    Some(request @ WorkerRequest::SetToken { .. }) => {
                        handle_request(api.clone(), request, response_tx.clone()).await;
                    }
                    Some(request) => {
                        let api = api.clone();
                        let tx = response_tx.clone();
                        let token = cancel.clone();
                        tokio::spawn(async move {
                            tokio::select! {
                                _ = token.cancelled() => {}
                                _ = handle_request(api, request, tx) => {}
                            }
                        });
                    }
                    None => break,
                },
            }
        }
    });

    log::debug!("Glossary worker thread shutting down");
}

async fn handle_request(
    api: Arc<dyn GlossaryApi>,
    request: WorkerRequest,
    response_tx: Sender<WorkerResponse>,
) {
    match request {
        WorkerRequest::Lookup {
            request_id,
            query,
            language,
        } => {
            log::debug!("Lookup {} for {:?} ({})", request_id, query, language);
            let result = api.suggestions(&query, language).await;
            report_expiry(&result, &response_tx);
            let outcome = classify_lookup(&query, result);
            let _ = response_tx.send(WorkerResponse::Lookup {
                request_id,
                outcome,
            });
        }
        WorkerRequest::Search { request_id, query } => {
            log::debug!("Search {} for {:?}", request_id, query);
            let result = api.search(&query).await;
            report_expiry(&result, &response_tx);
            let response = classify_search(&query, result);
            let _ = response_tx.send(WorkerResponse::Search {
                request_id,
                response,
            });
        }
        WorkerRequest::SetToken { token } => {
            log::debug!("API token {}", if token.is_some() { "replaced" } else { "cleared" });
            api.set_token(token);
        }
    }
}

fn report_expiry<T>(result: &Result<T, ServiceError>, response_tx: &Sender<WorkerResponse>) {
    if matches!(result, Err(e) if e.is_unauthorized()) {
        let _ = response_tx.send(WorkerResponse::SessionExpired);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
