//! Search input: the raw query typed by the user and the validated request built from it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::state::SearchError;

/// Which record field the term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    #[default]
    Title,
    Author,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::Title, SearchMode::Author];

    /// Query parameter name used for this mode (also the `<select>` value).
    pub fn param_name(self) -> &'static str {
        match self {
            SearchMode::Title => "title",
            SearchMode::Author => "author",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported search mode `{0}`")]
pub struct UnknownSearchMode(pub String);

impl FromStr for SearchMode {
    type Err = UnknownSearchMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "title" => Ok(SearchMode::Title),
            "author" => Ok(SearchMode::Author),
            other => Err(UnknownSearchMode(other.to_string())),
        }
    }
}

/// Query as entered in the form. The term is kept untrimmed until validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub term: String,
    pub mode: SearchMode,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            term: term.into(),
            mode,
        }
    }

    /// Trim the term and reject it when nothing is left.
    pub fn validate(&self) -> Result<SearchRequest, SearchError> {
        let term = self.term.trim();
        if term.is_empty() {
            return Err(SearchError::EmptyTerm);
        }
        Ok(SearchRequest {
            term: term.to_string(),
            mode: self.mode,
        })
    }
}

/// A validated query: non-empty, trimmed term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    term: String,
    mode: SearchMode,
}

impl SearchRequest {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }
}
