//! Search controller: the only owner and mutator of [`SearchState`].
//!
//! A search runs in two halves. [`SearchController::submit`] validates the
//! query and moves the state synchronously (to `Failed` or `Loading`). For a
//! valid query it hands back a [`SearchTicket`]; the caller performs the
//! catalog request however its runtime prefers and reports the outcome through
//! [`SearchController::settle`], which always leaves the loading state.
//!
//! Every submit advances a generation counter. A ticket from an older
//! generation is discarded on settle, so a slow response can never overwrite
//! the state of a newer search.

use dioxus::logger::tracing::{debug, warn};

use super::catalog::{CatalogError, CatalogSource};
use super::query::{SearchQuery, SearchRequest};
use super::state::{DisplayState, SearchError, SearchResult, SearchState};

/// Handle for one in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    request: SearchRequest,
}

impl SearchTicket {
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchController {
    state: SearchState,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn display(&self) -> DisplayState {
        self.state.display()
    }

    /// Start a search. Returns `None` when the term is blank, in which case
    /// the error is already visible and nothing must be fetched.
    pub fn submit(&mut self, query: &SearchQuery) -> Option<SearchTicket> {
        self.generation = self.generation.wrapping_add(1);

        match query.validate() {
            Ok(request) => {
                debug!(
                    generation = self.generation,
                    mode = %request.mode(),
                    term = request.term(),
                    "search submitted"
                );
                self.begin_loading();
                Some(SearchTicket {
                    generation: self.generation,
                    request,
                })
            }
            Err(err) => {
                debug!(generation = self.generation, "search rejected: {err}");
                self.fail(err);
                None
            }
        }
    }

    /// Apply the outcome of a ticket's request. Returns `false` when the
    /// ticket is stale and the state was left untouched.
    pub fn settle(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<SearchResult>, CatalogError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale search response"
            );
            return false;
        }

        match outcome {
            Ok(records) if records.is_empty() => self.finish_empty(),
            Ok(records) => self.finish_with(records),
            Err(err) => {
                warn!(term = ticket.request.term(), "catalog search failed: {err}");
                self.fail(SearchError::Transport);
            }
        }
        true
    }

    /// Submit, run the request against `catalog` and settle in one go.
    pub async fn search<C: CatalogSource>(
        &mut self,
        query: &SearchQuery,
        catalog: &C,
    ) -> DisplayState {
        if let Some(ticket) = self.submit(query) {
            let outcome = catalog.search(ticket.request()).await;
            self.settle(&ticket, outcome);
        }
        self.display()
    }

    // Stale results are cleared before the new request resolves.
    fn begin_loading(&mut self) {
        self.state = SearchState::Loading;
    }

    fn fail(&mut self, err: SearchError) {
        self.state = SearchState::Failed(err);
    }

    fn finish_empty(&mut self) {
        self.state = SearchState::NoResults;
    }

    fn finish_with(&mut self, records: Vec<SearchResult>) {
        debug!(count = records.len(), "search settled");
        self.state = SearchState::Results(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::SearchMode;

    fn record(id: &str, title: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            title: title.to_string(),
            authors: Vec::new(),
            first_publish_year: None,
            cover_id: None,
            isbns: Vec::new(),
        }
    }

    fn query(term: &str) -> SearchQuery {
        SearchQuery::new(term, SearchMode::Title)
    }

    #[test]
    fn blank_term_fails_without_loading() {
        let mut controller = SearchController::new();
        assert!(controller.submit(&query("   ")).is_none());
        assert_eq!(controller.display(), DisplayState::Error);
        assert_eq!(
            controller.state().error_message().as_deref(),
            Some("Please enter a search term.")
        );
        assert!(controller.state().has_searched());
        assert!(!controller.state().is_loading());
    }

    #[test]
    fn valid_submit_is_loading_until_settled() {
        let mut controller = SearchController::new();
        let ticket = controller.submit(&query("dune")).unwrap();
        assert_eq!(controller.display(), DisplayState::Loading);
        assert!(controller.state().results().is_empty());
        assert!(controller.state().error().is_none());
        assert_eq!(ticket.request().term(), "dune");
    }

    #[test]
    fn new_submit_clears_previous_results() {
        let mut controller = SearchController::new();
        let first = controller.submit(&query("dune")).unwrap();
        controller.settle(&first, Ok(vec![record("/works/OL1W", "Dune")]));
        assert_eq!(controller.display(), DisplayState::Results);

        controller.submit(&query("emma")).unwrap();
        assert_eq!(controller.display(), DisplayState::Loading);
        assert!(controller.state().results().is_empty());
    }

    #[test]
    fn settle_covers_every_outcome() {
        let mut controller = SearchController::new();

        let ticket = controller.submit(&query("a")).unwrap();
        controller.settle(&ticket, Ok(Vec::new()));
        assert_eq!(controller.display(), DisplayState::NoResults);
        assert!(controller.state().error().is_none());

        let ticket = controller.submit(&query("a")).unwrap();
        controller.settle(&ticket, Err(CatalogError::Status(500)));
        assert_eq!(controller.state().error(), Some(SearchError::Transport));
        assert!(!controller.state().is_loading());

        let ticket = controller.submit(&query("a")).unwrap();
        controller.settle(
            &ticket,
            Ok(vec![record("/works/OL2W", "B"), record("/works/OL1W", "A")]),
        );
        let titles: Vec<&str> = controller
            .state()
            .results()
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut controller = SearchController::new();
        let slow = controller.submit(&query("first")).unwrap();
        let fast = controller.submit(&query("second")).unwrap();

        assert!(controller.settle(&fast, Ok(vec![record("/works/OL2W", "Second")])));
        assert!(!controller.settle(&slow, Err(CatalogError::Timeout(10))));
        assert_eq!(controller.display(), DisplayState::Results);
        assert_eq!(controller.state().results()[0].title, "Second");
    }

    #[test]
    fn blank_submit_invalidates_in_flight_request() {
        let mut controller = SearchController::new();
        let pending = controller.submit(&query("first")).unwrap();
        controller.submit(&query(""));

        assert!(!controller.settle(&pending, Ok(vec![record("/works/OL1W", "First")])));
        assert_eq!(controller.state().error(), Some(SearchError::EmptyTerm));
    }
}
