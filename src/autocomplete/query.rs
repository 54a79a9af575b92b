//! Input classification
//!
//! Turns the raw search input into a decision without touching the network
//! or the screen.

/// Minimum trimmed length (in characters) before suggestions are fetched
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// A trimmed search query long enough to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an input change should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDecision {
    /// Too short: drop the list, no request
    Clear,
    /// Long enough: look this query up
    Lookup(Query),
}

/// Decide what an input change should do
///
/// The value is trimmed first; length is counted in characters, not bytes.
pub fn decide(input: &str, min_len: usize) -> InputDecision {
    let trimmed = input.trim();
    if trimmed.chars().count() < min_len {
        InputDecision::Clear
    } else {
        InputDecision::Lookup(Query(trimmed.to_string()))
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
