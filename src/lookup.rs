//! Suggestion lookups
//!
//! The HTTP client, the background worker that runs lookups off the UI
//! thread, and the message types exchanged with it.

use std::sync::Arc;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::autocomplete::{InputDecision, Suggestion, decide};
use crate::error::AppError;

mod client;
pub mod worker;

pub use client::{AutocompleteClient, build_query_url};
pub use worker::{LookupHandle, spawn_worker};

/// Errors that can occur during a lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Transport failure (connection refused, reset, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("HTTP status {code}")]
    Status { code: u16 },

    /// Body was not JSON or had no `suggestions` field
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was superseded before it finished
    #[error("Request cancelled")]
    Cancelled,
}

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// Fetch suggestions for an already-trimmed query
    Fetch {
        query: String,
        /// Sequence number, used to discard stale responses
        request_id: u64,
    },
    /// Abort the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Suggestions {
        request_id: u64,
        suggestions: Vec<Suggestion>,
    },
    Failed {
        request_id: u64,
        error: LookupError,
    },
    Cancelled {
        request_id: u64,
    },
}

impl LookupResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupResponse::Suggestions { request_id, .. }
            | LookupResponse::Failed { request_id, .. }
            | LookupResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Anything that can answer a suggestion query
///
/// The HTTP client is the production source; tests plug in canned ones.
pub trait SuggestionSource: Send + Sync {
    fn fetch(&self, query: String) -> BoxFuture<'static, Result<Vec<Suggestion>, LookupError>>;
}

impl<S: SuggestionSource + ?Sized> SuggestionSource for Arc<S> {
    fn fetch(&self, query: String) -> BoxFuture<'static, Result<Vec<Suggestion>, LookupError>> {
        (**self).fetch(query)
    }
}

/// One-shot lookup outside the interactive shell
///
/// Applies the same length rule as the widget: short input makes no request.
/// Lookup failures are logged and yield no suggestions.
pub fn lookup_once(
    client: &AutocompleteClient,
    input: &str,
    min_query_len: usize,
) -> Result<Vec<Suggestion>, AppError> {
    let query = match decide(input, min_query_len) {
        InputDecision::Clear => return Ok(Vec::new()),
        InputDecision::Lookup(query) => query,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(client.fetch_suggestions(query.as_str())) {
        Ok(suggestions) => Ok(suggestions),
        Err(e) => {
            log::warn!("Error fetching suggestions: {}", e);
            Ok(Vec::new())
        }
    }
}
