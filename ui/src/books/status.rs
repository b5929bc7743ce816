use dioxus::prelude::*;

use crate::core::{DisplayState, SearchError};
use crate::{i18n, t};

/// Message panel for every display state except `Results`.
#[component]
pub fn StatusPanel(display: DisplayState, error: Option<SearchError>) -> Element {
    i18n::use_language();
    let class = format!("status-message {}", display.css_class());

    let body = match display {
        DisplayState::Loading => rsx! {
            span { class: "spinner spinner--large", aria_hidden: "true" }
            p { {t!("status-loading")} }
        },
        DisplayState::Error => {
            let message = match error {
                Some(SearchError::EmptyTerm) => t!("error-empty-term"),
                _ => t!("error-transport"),
            };
            rsx! {
                p { class: "status-message__error", role: "alert", "{message}" }
            }
        }
        DisplayState::NoResults => rsx! {
            p { {t!("status-no-results")} }
            p { class: "status-message__hint", {t!("status-no-results-hint")} }
        },
        DisplayState::Initial => rsx! {
            p { {t!("status-initial")} }
        },
        // The grid replaces this panel once records arrive.
        DisplayState::Results => rsx! {},
    };

    rsx! {
        div { class: "{class}", {body} }
    }
}
