//! Catalog access: request URL construction, the HTTP client and response decoding.

use std::future::Future;

use dioxus::logger::tracing::debug;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::config::{CatalogConfig, SEARCH_FIELDS};
use super::query::SearchRequest;
use super::state::SearchResult;
use super::timing;

/// Diagnostic detail of a failed catalog call. Never shown to the user.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("catalog responded with HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no response within {0} ms")]
    Timeout(u64),
}

/// Anything that can answer a validated search with records in relevance order.
pub trait CatalogSource {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<SearchResult>, CatalogError>>;
}

/// Build `GET <endpoint>?<mode>=<term>&fields=...&limit=<page_size>`.
pub fn search_url(config: &CatalogConfig, request: &SearchRequest) -> Result<Url, CatalogError> {
    let mut url = Url::parse(&config.search_endpoint)?;
    url.query_pairs_mut()
        .append_pair(request.mode().param_name(), request.term())
        .append_pair("fields", SEARCH_FIELDS)
        .append_pair("limit", &config.page_size.to_string());
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchResult>,
}

/// Decode a search response body. A body without `docs` counts as no matches.
pub fn parse_response(body: &str) -> Result<Vec<SearchResult>, CatalogError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.docs)
}

/// Open Library search over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn fetch(&self, url: Url) -> Result<Vec<SearchResult>, CatalogError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_response(&body)
    }
}

impl CatalogSource for HttpCatalog {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, CatalogError> {
        let url = search_url(&self.config, request)?;
        debug!(%url, "querying catalog");

        let timeout_ms = self.config.timeout_ms;
        match timing::with_timeout(timeout_ms, self.fetch(url)).await {
            Some(outcome) => outcome,
            None => Err(CatalogError::Timeout(timeout_ms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{SearchMode, SearchQuery};

    fn request(term: &str, mode: SearchMode) -> SearchRequest {
        SearchQuery::new(term, mode).validate().unwrap()
    }

    #[test]
    fn url_uses_mode_as_parameter_name() {
        let url = search_url(
            &CatalogConfig::default(),
            &request(" tolkien ", SearchMode::Author),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://openlibrary.org/search.json?author=tolkien\
             &fields=key%2Ctitle%2Cauthor_name%2Cfirst_publish_year%2Ccover_i%2Cisbn&limit=24"
        );
    }

    #[test]
    fn url_encodes_the_term() {
        let url = search_url(
            &CatalogConfig::default(),
            &request("war & peace", SearchMode::Title),
        )
        .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("title".to_string(), "war & peace".to_string()));
        assert_eq!(pairs[2], ("limit".to_string(), "24".to_string()));
        assert!(url.as_str().contains("title=war+%26+peace"));
    }

    #[test]
    fn bad_endpoint_is_reported() {
        let config = CatalogConfig::default().with_search_endpoint("not a url");
        let err = search_url(&config, &request("x", SearchMode::Title)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEndpoint(_)));
    }

    #[test]
    fn response_preserves_doc_order() {
        let body = r#"{"numFound": 3, "docs": [
            {"key": "/works/OL3W", "title": "C"},
            {"key": "/works/OL1W", "title": "A", "author_name": ["X", "Y"]},
            {"key": "/works/OL2W", "title": "B", "cover_i": 9, "isbn": ["123"]}
        ]}"#;
        let docs = parse_response(body).unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["/works/OL3W", "/works/OL1W", "/works/OL2W"]);
        assert_eq!(docs[1].authors, ["X", "Y"]);
        assert_eq!(docs[2].cover_id, Some(9));
    }

    #[test]
    fn missing_docs_means_no_matches() {
        assert!(parse_response(r#"{"numFound": 0}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            parse_response("<html>busy</html>"),
            Err(CatalogError::Decode(_))
        ));
    }
}
