//! Search core: query validation, catalog access and the search state machine.
//! Components live elsewhere; everything here is testable without a renderer.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod query;
pub mod state;
pub mod timing;

pub use catalog::{CatalogError, CatalogSource, HttpCatalog};
pub use config::CatalogConfig;
pub use controller::{SearchController, SearchTicket};
pub use query::{SearchMode, SearchQuery, SearchRequest};
pub use state::{DisplayState, SearchError, SearchResult, SearchState};
