use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::BookCard;
use crate::i18n;

#[component]
pub fn BookGrid(cards: Vec<BookCard>) -> Element {
    rsx! {
        div { class: "results-grid",
            for (key, card) in cards.into_iter().map(|card| (card.key.clone(), card)) {
                BookCardView { key: "{key}", card }
            }
        }
    }
}

/// One result card. The cover starts at the catalog URL and swaps to the
/// generated placeholder once if the image fails to load.
#[component]
fn BookCardView(card: BookCard) -> Element {
    i18n::use_language();
    let initial_src = card.image_src().to_string();
    let mut src = use_signal(move || initial_src);
    let placeholder = card.placeholder_url.clone();

    let alt = crate::t!("card-cover-alt", title = card.title.as_str());
    let by_line = crate::t!("card-by", authors = card.authors_line.as_str());
    let published = crate::t!("card-first-published", year = card.publish_year_line.as_str());

    rsx! {
        a {
            class: "book-card",
            href: "{card.detail_url}",
            target: "_blank",
            rel: "noopener noreferrer",
            img {
                class: "book-card__cover",
                src: "{src}",
                alt: "{alt}",
                "loading": "lazy",
                onerror: move |_| {
                    if src() != placeholder {
                        debug!(failed = %src(), "cover unavailable, using placeholder");
                        src.set(placeholder.clone());
                    }
                },
            }
            div { class: "book-card__content",
                h3 { class: "book-card__title", title: "{card.title}", "{card.title}" }
                p { class: "book-card__author", title: "{card.authors_line}", "{by_line}" }
                p { class: "book-card__year", "{published}" }
            }
        }
    }
}
