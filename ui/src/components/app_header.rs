use crate::i18n;
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

/// Application header: title, tagline and the locale switcher.
///
/// The switcher re-renders via a local signal; every render pulls fresh
/// localized strings via `t!`. If the platform crate provided a global
/// `Signal<String>` language code through context, the selector starts from it
/// and updates it on change, so subscribed views re-render in place.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(move || {
        lang_code_ctx
            .map(|code| code.peek().clone())
            .unwrap_or_else(i18n::current_language)
    });
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let _lang_marker = i18n::use_language();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, "language switch failed: {err}"),
        }
    };

    rsx! {
        header { class: "app-header",
            // Hidden marker ensures the header re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    h1 { class: "app-header__title",
                        span { class: "app-header__mark", aria_hidden: "true" }
                        {t!("app-title")}
                    }
                    p { class: "app-header__tagline", {t!("app-tagline")} }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
