use dioxus::prelude::*;

use crate::app::use_services;
use crate::i18n::{self, Locale, LOCALES};
use crate::t;

/// Locale switcher for the landing screen.
///
/// Switching updates the Fluent loader, persists the choice and pushes the new
/// code into the global language signal (if the platform provided one), which
/// remounts the routed subtree.
#[component]
pub fn LanguagePicker() -> Element {
    let services = use_services();
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current = i18n::current_locale();

    let on_change = move |evt: FormEvent| {
        let Some(locale) = Locale::from_code(&evt.value()) else {
            return;
        };
        match i18n::remember_locale(services.sessions.backing_store(), locale) {
            Ok(()) => {
                if let Some(mut code) = lang_code_ctx {
                    code.set(locale.code().to_string());
                }
            }
            Err(err) => tracing::warn!("[i18n] could not switch to {}: {err}", locale.code()),
        }
    };

    rsx! {
        div { class: "language-picker",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!("language-label")}
            }
            select {
                id: "locale-select",
                class: "language-picker__select",
                value: "{current.code()}",
                oninput: on_change,
                for info in LOCALES.iter() {
                    option {
                        key: "{info.code}",
                        value: "{info.code}",
                        selected: info.locale == current,
                        "{info.flag} {info.native_name}"
                    }
                }
            }
        }
    }
}
