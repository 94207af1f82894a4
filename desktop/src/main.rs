#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::Route;

const THEME_CSS: &str = ui::THEME_CSS;

#[cfg(feature = "desktop")]
fn main() {
    // Phone-shaped window: the screens are laid out for a mobile viewport.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Bitevest – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(430.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    // Initializes i18n, restores the saved language and hydrates the session
    // from the on-disk store before the first screen renders.
    let lang_code = ui::app::use_app_providers();

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS}" }

        // Keyed wrapper div to force full remount on language change and include a hidden
        // reactive marker so we always depend on the lang_code signal.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}
