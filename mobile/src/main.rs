use dioxus::prelude::*;

use ui::Route;

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let lang_code = ui::app::use_app_providers();

    rsx! {
        // Always inline the shared theme (no bundled stylesheet on mobile)
        document::Style { "{THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}
