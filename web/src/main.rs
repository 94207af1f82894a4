use dioxus::prelude::*;

use ui::Route;

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Services, language signal and session signal for every screen.
    let lang_code = ui::app::use_app_providers();

    rsx! {
        // Global app resources
        document::Title { "Bitevest" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Style { "{THEME_CSS}" }

        // Keyed wrapper div to force full remount on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}
