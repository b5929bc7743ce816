//! Internationalization (i18n) support for `bookfinder-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/bookfinder-ui.ftl   (fallback/reference)
//!   es-ES/bookfinder-ui.ftl
//!   fr-FR/bookfinder-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("search-button");
//! let by = t!("card-by", authors = "Ursula K. Le Guin");
//! ```
//!
//! To add a new locale, copy `en-US/bookfinder-ui.ftl` to
//! `i18n/<lang-id>/bookfinder-ui.ftl`, translate the values (keep IDs and
//! placeholders identical) and register it in `tests/i18n_missing_keys.rs`.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("search-button")
///     t!("card-by", authors = "Emma")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "bookfinder-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(_) => disable_isolation(),
            Err(err) => warn!("failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    disable_isolation();
    Ok(())
}

/// Titles and author names are interpolated into text and attributes; keep
/// them free of bidi isolation marks. Only affects bundles that are already
/// loaded, so this runs after every `select`.
fn disable_isolation() {
    LOADER.set_use_isolating(false);
}

/// Tag of the language lookups currently resolve in, e.g. `es-ES`.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Subscribe the calling component to the launcher's language signal so its
/// `t!` lookups re-run after a switch. Returns the active tag.
///
/// Child components are memoized on their props; without this a switch would
/// only re-render the components that own the signal.
pub fn use_language() -> String {
    dioxus::prelude::try_use_context::<dioxus::prelude::Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(current_language)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;
    use std::sync::{Mutex, MutexGuard};

    // The loader is global; tests that select languages or look up messages run one at a time.
    static LOADER_LOCK: Mutex<()> = Mutex::new(());

    fn english() -> MutexGuard<'static, ()> {
        let guard = LOADER_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        init();
        set_language(FALLBACK_LANGUAGE).unwrap();
        guard
    }

    #[test]
    fn bundled_languages_are_listed() {
        assert_eq!(available_languages(), ["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn fallback_lookup_works() {
        let _guard = english();
        assert_eq!(fl!(&*LOADER, "search-button"), "Search");
        assert_eq!(
            fl!(&*LOADER, "card-by", authors = "J.R.R. Tolkien"),
            "by J.R.R. Tolkien"
        );
    }

    #[test]
    fn interpolated_values_carry_no_isolation_marks() {
        let _guard = english();
        let alt = fl!(&*LOADER, "card-cover-alt", title = "The Hobbit");
        let year = fl!(&*LOADER, "card-first-published", year = "1937");

        for text in [&alt, &year] {
            assert!(
                !text.contains(['\u{2068}', '\u{2069}']),
                "unexpected isolation marks in {text:?}"
            );
        }
        assert_eq!(alt, "Cover of The Hobbit");
        assert_eq!(year, "First published: 1937");
    }

    #[test]
    fn isolation_stays_off_after_switching_language() {
        let _guard = english();
        set_language("es-ES").unwrap();
        let by = fl!(&*LOADER, "card-by", authors = "Gabriel García Márquez");
        set_language(FALLBACK_LANGUAGE).unwrap();
        assert_eq!(by, "de Gabriel García Márquez");
    }

    #[test]
    fn current_language_follows_switches() {
        let _guard = english();
        assert_eq!(current_language(), "en-US");
        set_language("fr-FR").unwrap();
        let switched = current_language();
        set_language(FALLBACK_LANGUAGE).unwrap();
        assert_eq!(switched, "fr-FR");
    }

    #[test]
    fn unparsable_tag_is_ignored() {
        let _guard = english();
        assert!(set_language("not a language tag!").is_ok());
        assert_eq!(fl!(&*LOADER, "search-button"), "Search");
    }
}
