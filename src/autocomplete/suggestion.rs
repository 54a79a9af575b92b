//! Suggestion types returned by the storefront search endpoint

use serde::Deserialize;

use crate::lookup::LookupError;

/// A single autocomplete candidate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    /// Product name, copied into the search input when the row is chosen
    pub name: String,
    /// Brand shown in parentheses after the name
    ///
    /// The backend may send `null` for products without a brand.
    #[serde(default)]
    pub brand: Option<String>,
    /// Product primary key, carried through but never rendered
    #[serde(default)]
    pub id: Option<u64>,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: Some(brand.into()),
            id: None,
        }
    }

    /// Row text: `name (brand)`
    ///
    /// A null or missing brand leaves the parentheses empty.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.brand.as_deref().unwrap_or(""))
    }
}

/// Body of a successful autocomplete response
#[derive(Debug, Deserialize)]
struct AutocompleteBody {
    suggestions: Vec<Suggestion>,
}

/// Parse an autocomplete response body
///
/// The `suggestions` field is mandatory; a body without it is malformed.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, LookupError> {
    serde_json::from_str::<AutocompleteBody>(body)
        .map(|parsed| parsed.suggestions)
        .map_err(|e| LookupError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
