use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::CatalogConfig;
use ui::views::Search;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Search {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppHeader updates it on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(CatalogConfig::default);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        // Views re-render in place on language change; search state survives.
        Router::<Route> {}
    }
}

/// Web layout: shared header above the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[logger] already initialized ({err})");
    }
}
