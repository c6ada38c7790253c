use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

pub mod title;

pub use title::{OmdbSearchItem, Title, TitleType};

/// Logical search category requested by the caller.
///
/// OMDb has a single search route; the endpoint only decides which query
/// parameters get attached. `Person` degrades to a plain title search since
/// OMDb cannot search people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchEndpoint {
    Movie,
    Person,
}

impl SearchEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEndpoint::Movie => "movie",
            SearchEndpoint::Person => "person",
        }
    }
}

impl FromStr for SearchEndpoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(SearchEndpoint::Movie),
            "person" => Ok(SearchEndpoint::Person),
            other => Err(AppError::UnsupportedEndpoint(other.to_string())),
        }
    }
}

impl Display for SearchEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw payload returned by the OMDb search route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbSearchResponse {
    /// "True" or "False"
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<Value>>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<TotalResults>,
}

impl OmdbSearchResponse {
    /// Whether OMDb flagged the request as a logical failure
    pub fn is_failure(&self) -> bool {
        self.response.as_deref() == Some("False")
    }

    /// Upstream error message, if the payload carried one
    pub fn error_message(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// Result count as reported upstream.
///
/// OMDb sends it as a string (`"42"`), but numbers are accepted too and
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalResults {
    Count(Number),
    Text(String),
}

impl TotalResults {
    /// Empty strings count as absent
    fn is_blank(&self) -> bool {
        matches!(self, TotalResults::Text(s) if s.is_empty())
    }
}

impl Default for TotalResults {
    fn default() -> Self {
        TotalResults::Count(Number::from(0u64))
    }
}

impl From<u64> for TotalResults {
    fn from(count: u64) -> Self {
        TotalResults::Count(Number::from(count))
    }
}

impl From<&str> for TotalResults {
    fn from(text: &str) -> Self {
        TotalResults::Text(text.to_string())
    }
}

// ============================================================================
// Normalized Types
// ============================================================================

/// Normalized search result handed back to callers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Upstream result objects, passed through without reshaping
    pub results: Vec<Value>,
    pub total_results: TotalResults,
}

impl SearchResults {
    /// Typed view over the results. Items that don't look like OMDb search
    /// hits are skipped.
    pub fn titles(&self) -> Vec<Title> {
        self.results.iter().filter_map(Title::from_value).collect()
    }
}

impl From<OmdbSearchResponse> for SearchResults {
    fn from(response: OmdbSearchResponse) -> Self {
        let total_results = response
            .total_results
            .filter(|total| !total.is_blank())
            .unwrap_or_default();

        SearchResults {
            results: response.search.unwrap_or_default(),
            total_results,
        }
    }
}
