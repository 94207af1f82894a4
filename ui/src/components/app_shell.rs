use dioxus::prelude::*;

use crate::routes::Route;

/// Layout wrapping every routed screen.
#[component]
pub fn AppShell() -> Element {
    // Subscribe to the global language code so the shell re-renders on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        // Hidden marker node retains reactive dependency on language signal.
        div { style: "display:none", "{lang_marker}" }
        main { class: "app-shell", lang: "{lang_marker}",
            Outlet::<Route> {}
        }
    }
}
