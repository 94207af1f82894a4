use dioxus::prelude::*;

use crate::dashboard::{Destination, TABS};
use crate::t;

/// Fixed tab bar pinned to the bottom of the dashboard.
#[component]
pub fn BottomTabs(active: Destination) -> Element {
    rsx! {
        nav { class: "bottom-tabs", aria_label: t!("tabs-label"),
            for tab in TABS.iter().copied() {
                {render_tab(tab, tab == active)}
            }
        }
    }
}

fn render_tab(tab: Destination, is_active: bool) -> Element {
    let class = if is_active {
        "bottom-tabs__tab bottom-tabs__tab--active"
    } else {
        "bottom-tabs__tab"
    };
    let label = tab.label();

    rsx! {
        Link { key: "{tab.path()}", class: "{class}", to: tab.route(),
            span { class: "bottom-tabs__icon", aria_hidden: "true", "{tab.icon()}" }
            span { class: "bottom-tabs__label", "{label}" }
        }
    }
}
