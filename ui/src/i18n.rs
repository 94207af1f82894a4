//! Internationalization (i18n) support for `bitevest-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/bitevest-ui.ftl   (fallback/reference)
//!   fr-FR/bitevest-ui.ftl
//!   mg-MG/bitevest-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("landing-title");
//! ```
//!
//! The picker only ever offers the three entries of [`LOCALES`]. Adding a
//! locale means a new FTL folder *and* a new table entry; the completeness
//! tests under `tests/` keep the two in sync.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - A choice saved under [`LANGUAGE_KEY`] wins over both.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::storage::KeyValueStore;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("landing-title")
///     t!("dashboard-greeting", phone = session.phone.as_str())
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
const DOMAIN: &str = "bitevest-ui";

/// Storage key holding the code of the locale picked on the landing screen.
pub const LANGUAGE_KEY: &str = "language";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = Locale::FALLBACK
        .code()
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// The locales offered by the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    French,
    Malagasy,
}

/// Static description of one picker entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    pub locale: Locale,
    pub code: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
}

pub static LOCALES: [LocaleInfo; 3] = [
    LocaleInfo {
        locale: Locale::English,
        code: "en-US",
        native_name: "English",
        flag: "🇬🇧",
    },
    LocaleInfo {
        locale: Locale::French,
        code: "fr-FR",
        native_name: "Français",
        flag: "🇫🇷",
    },
    LocaleInfo {
        locale: Locale::Malagasy,
        code: "mg-MG",
        native_name: "Malagasy",
        flag: "🇲🇬",
    },
];

impl Locale {
    pub const FALLBACK: Locale = Locale::English;

    pub fn info(self) -> &'static LocaleInfo {
        LOCALES
            .iter()
            .find(|info| info.locale == self)
            .unwrap_or(&LOCALES[0])
    }

    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// Matches on the primary language subtag, so `fr`, `fr-CA` and `fr-FR` all map to French.
    pub fn from_code(code: &str) -> Option<Self> {
        let lang: LanguageIdentifier = code.parse().ok()?;
        Self::from_language(&lang)
    }

    pub fn from_language(lang: &LanguageIdentifier) -> Option<Self> {
        match lang.language.as_str() {
            "en" => Some(Self::English),
            "fr" => Some(Self::French),
            "mg" => Some(Self::Malagasy),
            _ => None,
        }
    }
}

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch the active bundle to `locale`.
pub fn set_locale(locale: Locale) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = locale.code().parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// The locale currently driving lookups.
pub fn current_locale() -> Locale {
    Locale::from_language(&LOADER.current_language()).unwrap_or(Locale::FALLBACK)
}

/// Apply the locale saved by a previous [`remember_locale`], if any.
pub fn restore_locale<S: KeyValueStore>(store: &S) -> Option<Locale> {
    let saved = match store.get(LANGUAGE_KEY) {
        Ok(saved) => saved?,
        Err(err) => {
            tracing::warn!("[i18n] could not read saved language ({err})");
            return None;
        }
    };
    let locale = Locale::from_code(&saved)?;
    match set_locale(locale) {
        Ok(()) => Some(locale),
        Err(err) => {
            tracing::warn!("[i18n] saved language {saved} could not be applied ({err})");
            None
        }
    }
}

/// Switch to `locale` and persist the choice.
pub fn remember_locale<S: KeyValueStore>(store: &S, locale: Locale) -> Result<(), i18n_embed::I18nEmbedError> {
    set_locale(locale)?;
    if let Err(err) = store.set(LANGUAGE_KEY, locale.code()) {
        tracing::warn!("[i18n] language switched but not saved ({err})");
    }
    tracing::info!("[i18n] language set to {}", locale.code());
    Ok(())
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
    use crate::core::storage::MemoryStore;
    use crate::i18n::fl;

    #[test]
    fn every_table_entry_is_embedded() {
        let embedded = available_languages();
        for info in LOCALES {
            assert!(embedded.iter().any(|l| l == info.code), "{} not embedded", info.code);
        }
        assert_eq!(embedded.len(), LOCALES.len());
    }

    #[test]
    fn locale_codes_map_back() {
        for info in LOCALES {
            assert_eq!(Locale::from_code(info.code), Some(info.locale));
            assert_eq!(info.locale.code(), info.code);
        }
        assert_eq!(Locale::from_code("fr-CA"), Some(Locale::French));
        assert_eq!(Locale::from_code("de-DE"), None);
        assert_eq!(Locale::from_code("not a tag"), None);
    }

    // Single test so the global loader is not switched concurrently by another test.
    #[test]
    fn switching_and_restoring_language() {
        init();
        set_locale(Locale::English).unwrap();
        assert_eq!(fl!(&*LOADER, "nav-home"), "Home");
        assert_eq!(current_locale(), Locale::English);

        let store = MemoryStore::new();
        remember_locale(&store, Locale::French).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("fr-FR"));
        assert_eq!(fl!(&*LOADER, "nav-home"), "Accueil");

        set_locale(Locale::English).unwrap();
        assert_eq!(restore_locale(&store), Some(Locale::French));
        assert_eq!(current_locale(), Locale::French);

        store.set(LANGUAGE_KEY, "zz-ZZ").unwrap();
        assert_eq!(restore_locale(&store), None);

        set_locale(Locale::English).unwrap();
    }
}
