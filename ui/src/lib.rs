//! Shared UI crate for Book Finder. Search logic, result cards and views live here.

use dioxus::prelude::*;

pub mod books;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application header (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;

    mod search_form;
    pub use search_form::SearchForm;
}

/// Shared theme. Linked as an asset on web; desktop embeds the same file inline.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
