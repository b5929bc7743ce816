//! Search lifecycle state.
//!
//! `SearchState` is the single source of truth for what the page shows. The
//! loading / error / has-searched / results views are derived from the active
//! variant, so they can never disagree with each other.

use serde::Deserialize;
use thiserror::Error;

/// One record returned by the catalog, in relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    /// Opaque catalog key, e.g. `/works/OL45883W`.
    #[serde(rename = "key")]
    pub id: String,
    pub title: String,
    #[serde(rename = "author_name", default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(rename = "cover_i", default)]
    pub cover_id: Option<u64>,
    #[serde(rename = "isbn", default)]
    pub isbns: Vec<String>,
}

/// User-facing failures. Transport detail is logged where it happens and
/// collapsed into a single message here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Please enter a search term.")]
    EmptyTerm,
    #[error("Failed to fetch books. Please check your connection and try again.")]
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Initial,
    Loading,
    Failed(SearchError),
    NoResults,
    Results(Vec<SearchResult>),
}

/// Payload-free view of [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    Initial,
    Loading,
    Error,
    NoResults,
    Results,
}

impl DisplayState {
    /// Modifier class for the status panel, e.g. `status-message--loading`.
    pub fn css_class(self) -> &'static str {
        match self {
            DisplayState::Initial => "status-message--initial",
            DisplayState::Loading => "status-message--loading",
            DisplayState::Error => "status-message--error",
            DisplayState::NoResults => "status-message--no-results",
            DisplayState::Results => "status-message--results",
        }
    }
}

impl SearchState {
    pub fn display(&self) -> DisplayState {
        match self {
            SearchState::Initial => DisplayState::Initial,
            SearchState::Loading => DisplayState::Loading,
            SearchState::Failed(_) => DisplayState::Error,
            SearchState::NoResults => DisplayState::NoResults,
            SearchState::Results(_) => DisplayState::Results,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    pub fn has_searched(&self) -> bool {
        !matches!(self, SearchState::Initial)
    }

    pub fn error(&self) -> Option<SearchError> {
        match self {
            SearchState::Failed(err) => Some(*err),
            _ => None,
        }
    }

    /// The fixed user-facing message of the current error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(|err| err.to_string())
    }

    /// Records of the last successful search; empty in every other state.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchState::Results(results) => results,
            _ => &[],
        }
    }
}
