use dioxus::prelude::*;

use crate::dashboard::DashboardView;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            DashboardView {}
        }
    }
}
