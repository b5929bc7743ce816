//! Catalog endpoints and request limits.
//!
//! The defaults point at Open Library. Platform crates hand a `CatalogConfig`
//! to the component tree through context; tests swap the endpoints for a local
//! mock server with the `with_*` setters.

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://openlibrary.org/search.json";
pub const DEFAULT_COVERS_BASE: &str = "https://covers.openlibrary.org";
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://placehold.co/180x270/667eea/ffffff";
pub const DEFAULT_CATALOG_BASE: &str = "https://openlibrary.org";

/// Result cap per search. Pagination is not offered.
pub const DEFAULT_PAGE_SIZE: usize = 24;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Fields requested from the search endpoint (exactly what a card needs).
pub const SEARCH_FIELDS: &str = "key,title,author_name,first_publish_year,cover_i,isbn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub search_endpoint: String,
    pub covers_base: String,
    pub placeholder_base: String,
    pub catalog_base: String,
    pub page_size: usize,
    pub timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            covers_base: DEFAULT_COVERS_BASE.to_string(),
            placeholder_base: DEFAULT_PLACEHOLDER_BASE.to_string(),
            catalog_base: DEFAULT_CATALOG_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl CatalogConfig {
    pub fn with_search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    pub fn with_covers_base(mut self, base: impl Into<String>) -> Self {
        self.covers_base = trim_base(base.into());
        self
    }

    pub fn with_catalog_base(mut self, base: impl Into<String>) -> Self {
        self.catalog_base = trim_base(base.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

// Record ids and cover paths already start with '/'.
fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
