use dioxus::prelude::*;

use crate::app::use_session;
use crate::components::LanguagePicker;
use crate::routes::{Route, REGISTER_PATH};
use crate::t;

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let session = use_session();

    // A returning user skips the form.
    let on_login = move |_| {
        let next = if session.peek().is_some() {
            Route::Dashboard {}
        } else {
            Route::Login {}
        };
        navigator.push(next);
    };
    let on_register = move |_| {
        navigator.push(Route::resolve(REGISTER_PATH));
    };

    rsx! {
        section { class: "page page-landing",
            header { class: "landing__top",
                div { class: "brand",
                    span { class: "brand__mark", aria_hidden: "true", "🍔" }
                    span { class: "brand__name", "Bitevest" }
                }
                LanguagePicker {}
            }

            div { class: "landing__hero",
                span { class: "landing__badge", {t!("landing-badge")} }
                h1 { class: "landing__title", {t!("landing-title")} }
                p { class: "landing__tagline", {t!("landing-tagline")} }
            }

            ul { class: "landing__features",
                li { {t!("landing-feature-invest")} }
                li { {t!("landing-feature-rewards")} }
                li { {t!("landing-feature-mobile")} }
            }

            div { class: "landing__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: on_login,
                    {t!("landing-cta-login")}
                }
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: on_register,
                    {t!("landing-cta-register")}
                }
                // Store listing does not exist yet.
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    {t!("landing-cta-download")}
                }
            }

            p { class: "landing__legal", {t!("landing-legal")} }
        }
    }
}
