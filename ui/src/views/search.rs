use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::books::{BookCard, BookGrid, StatusPanel};
use crate::components::SearchForm;
use crate::i18n;
use crate::core::{
    CatalogConfig, CatalogSource, DisplayState, HttpCatalog, SearchController, SearchQuery,
};

#[derive(Debug, Clone)]
enum SearchEvent {
    Submit(SearchQuery),
}

/// The search page: form on top, then either a status panel or the result grid.
///
/// Submits are handled in a coroutine. The state change for a submit happens
/// right away; the catalog request runs in its own task and settles the
/// controller when it completes, so a newer submit never waits on an older one.
#[component]
pub fn Search() -> Element {
    i18n::use_language();

    let config = try_use_context::<CatalogConfig>().unwrap_or_default();
    let catalog = use_hook(|| HttpCatalog::new(config.clone()));
    let controller = use_signal(SearchController::new);

    let search = use_coroutine(move |mut rx: UnboundedReceiver<SearchEvent>| {
        let catalog = catalog.clone();
        let mut controller = controller;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    SearchEvent::Submit(query) => {
                        let Some(ticket) = controller.with_mut(|c| c.submit(&query)) else {
                            continue;
                        };
                        let catalog = catalog.clone();
                        spawn(async move {
                            let mut controller = controller;
                            let outcome = catalog.search(ticket.request()).await;
                            controller.with_mut(|c| c.settle(&ticket, outcome));
                        });
                    }
                }
            }
        }
    });

    let state = controller.read().state().clone();
    let display = state.display();
    let cards: Vec<BookCard> = state
        .results()
        .iter()
        .map(|record| BookCard::render(record, &config))
        .collect();

    rsx! {
        section { class: "page page-search",
            SearchForm {
                busy: state.is_loading(),
                on_search: move |query: SearchQuery| search.send(SearchEvent::Submit(query)),
            }

            main { class: "page-search__results",
                if display == DisplayState::Results {
                    BookGrid { cards }
                } else {
                    StatusPanel { display, error: state.error() }
                }
            }
        }
    }
}
