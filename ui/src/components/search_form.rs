use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::{SearchMode, SearchQuery};
use crate::{i18n, t};

/// Mode select, term input and submit button. Emits the raw query; validation
/// belongs to the controller.
#[component]
pub fn SearchForm(busy: bool, on_search: EventHandler<SearchQuery>) -> Element {
    i18n::use_language();
    let mut term = use_signal(String::new);
    let mut mode = use_signal(SearchMode::default);

    let current_mode = mode();
    let mode_value = current_mode.param_name();
    let placeholder = match current_mode {
        SearchMode::Title => t!("search-placeholder-title"),
        SearchMode::Author => t!("search-placeholder-author"),
    };

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_search.call(SearchQuery::new(term(), mode()));
            },
            div { class: "search-form__inner",
                div { class: "search-form__select search-form__select--{mode_value}",
                    select {
                        aria_label: t!("mode-label"),
                        value: "{mode_value}",
                        onchange: move |evt: FormEvent| match evt.value().parse::<SearchMode>() {
                            Ok(selected) => mode.set(selected),
                            Err(err) => warn!("ignoring mode change: {err}"),
                        },
                        option { value: "title", {t!("mode-title")} }
                        option { value: "author", {t!("mode-author")} }
                    }
                }

                input {
                    r#type: "text",
                    class: "search-form__input",
                    value: "{term}",
                    placeholder: "{placeholder}",
                    aria_label: t!("search-input-label"),
                    oninput: move |evt: FormEvent| term.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "button button--primary search-form__submit",
                    disabled: busy,
                    if busy {
                        span { class: "spinner", aria_hidden: "true" }
                        {t!("search-button-busy")}
                    } else {
                        {t!("search-button")}
                    }
                }
            }
        }
    }
}
