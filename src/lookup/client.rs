//! HTTP client for the storefront autocomplete endpoint

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Url;

use super::{LookupError, SuggestionSource};
use crate::autocomplete::{Suggestion, parse_suggestions};
use crate::config::EndpointConfig;
use crate::error::AppError;

/// Build `{base}{path}?q=<escaped>`
///
/// The query is percent-escaped the way a browser's `encodeURIComponent`
/// would escape it, so spaces become `%20` rather than `+`.
pub fn build_query_url(base_url: &str, path: &str, query: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}?q={}", base, path, urlencoding::encode(query))
}

#[derive(Debug, Clone)]
pub struct AutocompleteClient {
    http: reqwest::Client,
    base_url: String,
    path: String,
}

impl AutocompleteClient {
    /// Create a client for the configured endpoint
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, AppError> {
        Url::parse(&endpoint.base_url)
            .map_err(|e| AppError::InvalidBaseUrl(format!("{}: {}", endpoint.base_url, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = endpoint.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: endpoint.base_url.clone(),
            path: endpoint.autocomplete_path.clone(),
        })
    }

    pub fn query_url(&self, query: &str) -> String {
        build_query_url(&self.base_url, &self.path, query)
    }

    /// GET the endpoint and parse the `suggestions` list
    pub async fn fetch_suggestions(&self, query: &str) -> Result<Vec<Suggestion>, LookupError> {
        let url = self.query_url(query);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        parse_suggestions(&body)
    }
}

impl SuggestionSource for AutocompleteClient {
    fn fetch(&self, query: String) -> BoxFuture<'static, Result<Vec<Suggestion>, LookupError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_suggestions(&query).await })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
