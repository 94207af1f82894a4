use dioxus::prelude::*;

use crate::login::LoginView;
use crate::routes::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "page page-login",
            Link { class: "page__back", to: Route::Landing {}, "← " {crate::t!("nav-back")} }
            h1 { {crate::t!("login-title")} }
            p { {crate::t!("login-intro")} }
            LoginView {}
        }
    }
}
