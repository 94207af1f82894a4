use dioxus::prelude::*;

use crate::routes::Route;

/// Placeholder for destinations this client links to but does not own.
#[component]
pub fn ComingSoon(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-coming-soon",
            h1 { {crate::t!("coming-soon-title")} }
            p { {crate::t!("coming-soon-body")} }
            code { class: "page-coming-soon__path", "{path}" }
            Link { class: "button button--primary", to: Route::Landing {}, {crate::t!("coming-soon-back")} }
        }
    }
}
