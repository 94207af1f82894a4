use dioxus::prelude::*;

use crate::app::{use_services, use_session};
use crate::components::BottomTabs;
use crate::routes::Route;
use crate::t;

use super::{gate, logout, Destination, Gate, TILES};

#[component]
pub fn DashboardView() -> Element {
    let services = use_services();
    let mut session = use_session();
    let navigator = use_navigator();
    let mut logout_failed = use_signal(|| false);

    // Checked once per activation; peek so logout does not re-trigger it.
    use_effect(move || {
        if gate(session.peek().as_ref()) == Gate::RedirectToLogin {
            tracing::info!("[session] dashboard opened without a session; redirecting to login");
            navigator.replace(Route::Login {});
        }
    });

    let on_logout = move |_| match logout(&services.sessions) {
        Ok(next) => {
            logout_failed.set(false);
            navigator.replace(next);
            session.set(None);
        }
        Err(_) => logout_failed.set(true),
    };

    let active = match gate(session.read().as_ref()) {
        Gate::RedirectToLogin => return rsx! {},
        Gate::Open(active) => active,
    };

    let greeting = t!("dashboard-greeting", phone = active.phone.as_str());

    rsx! {
        article { class: "dashboard",
            header { class: "dashboard__header",
                div { class: "dashboard__welcome",
                    h2 { class: "dashboard__title", {t!("dashboard-title")} }
                    p { class: "dashboard__greeting", "{greeting}" }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost dashboard__logout",
                    onclick: on_logout,
                    {t!("dashboard-logout")}
                }
            }

            if logout_failed() {
                p { class: "dashboard__error", role: "alert", {t!("dashboard-logout-failed")} }
            }

            nav { class: "dashboard__grid", aria_label: t!("dashboard-grid-label"),
                for tile in TILES.iter().copied() {
                    {render_tile(tile)}
                }
            }

            BottomTabs { active: Destination::Home }
        }
    }
}

fn render_tile(tile: Destination) -> Element {
    let label = tile.label();
    rsx! {
        Link { key: "{tile.path()}", class: "dashboard-tile", to: tile.route(),
            span { class: "dashboard-tile__icon", aria_hidden: "true", "{tile.icon()}" }
            span { class: "dashboard-tile__label", "{label}" }
        }
    }
}
