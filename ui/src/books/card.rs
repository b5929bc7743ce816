//! Display mapping for a single search record.

use crate::core::{CatalogConfig, SearchResult};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_YEAR: &str = "N/A";

/// Number of title words shown on a generated placeholder cover.
const PLACEHOLDER_WORDS: usize = 3;

/// Everything a card needs, precomputed so the view only handles static strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub key: String,
    pub title: String,
    pub authors_line: String,
    pub publish_year_line: String,
    /// Cover from the catalog; `None` when the record has neither a cover id nor an ISBN.
    pub cover_url: Option<String>,
    pub placeholder_url: String,
    pub detail_url: String,
}

impl BookCard {
    pub fn render(record: &SearchResult, config: &CatalogConfig) -> Self {
        Self {
            key: record.id.clone(),
            title: record.title.clone(),
            authors_line: authors_line(&record.authors),
            publish_year_line: publish_year_line(record.first_publish_year),
            cover_url: cover_url(record, &config.covers_base),
            placeholder_url: placeholder_url(&record.title, &config.placeholder_base),
            detail_url: format!("{}{}", config.catalog_base, record.id),
        }
    }

    /// Initial image source. The view swaps to `placeholder_url` if this fails to load.
    pub fn image_src(&self) -> &str {
        self.cover_url.as_deref().unwrap_or(&self.placeholder_url)
    }
}

pub fn authors_line(authors: &[String]) -> String {
    if authors.is_empty() {
        UNKNOWN_AUTHOR.to_string()
    } else {
        authors.join(", ")
    }
}

pub fn publish_year_line(year: Option<i32>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

/// Cover id first, then the first ISBN, then nothing.
pub fn cover_url(record: &SearchResult, covers_base: &str) -> Option<String> {
    if let Some(id) = record.cover_id {
        return Some(format!("{covers_base}/b/id/{id}-M.jpg"));
    }
    record
        .isbns
        .first()
        .filter(|isbn| !isbn.is_empty())
        .map(|isbn| format!("{covers_base}/b/isbn/{isbn}-M.jpg"))
}

pub fn placeholder_url(title: &str, placeholder_base: &str) -> String {
    let words = title
        .split_whitespace()
        .take(PLACEHOLDER_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{placeholder_base}?text={}", urlencoding::encode(&words))
}
