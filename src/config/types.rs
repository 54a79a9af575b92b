// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::autocomplete::{DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LEN};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_AUTOCOMPLETE_PATH: &str = "/store/autocomplete/";
pub const DEFAULT_SEARCH_PATH: &str = "/store/products/";

/// Storefront endpoint section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub autocomplete_path: String,
    /// Action of the search form a submission navigates to
    pub search_path: String,
    /// Per-request timeout; unset means wait forever
    pub timeout_ms: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            autocomplete_path: DEFAULT_AUTOCOMPLETE_PATH.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            timeout_ms: None,
        }
    }
}

/// Autocomplete behaviour section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub min_query_len: usize,
    pub debounce_ms: u64,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}
