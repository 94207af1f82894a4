//! Server-side renders of `/dashboard` through the real router, with and
//! without a stored session.

use std::rc::Rc;

use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;
use ui::app::AppServices;
use ui::core::config::AppConfig;
use ui::core::session::{Session, SessionStore};
use ui::core::storage::PlatformStore;
use ui::Route;

/// Session the harness hydrates its signal from.
#[derive(Clone)]
struct Seed(Option<Session>);

#[allow(non_snake_case)]
fn Harness() -> Element {
    let seed = use_context::<Seed>();
    let session = use_signal(move || seed.0.clone());
    use_context_provider(|| session);
    use_hook(|| {
        let history: Rc<dyn History> =
            Rc::new(MemoryHistory::with_initial_path(Route::Dashboard {}));
        provide_context(history)
    });

    rsx! { Router::<Route> {} }
}

fn render_dashboard(session: Option<Session>) -> String {
    ui::i18n::init();
    let dir = tempfile::tempdir().unwrap();
    let services = AppServices {
        config: AppConfig::default(),
        sessions: SessionStore::new(PlatformStore::at(dir.path().join("storage.json"))),
    };

    let mut dom = VirtualDom::new(Harness)
        .with_root_context(services)
        .with_root_context(Seed(session));
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn signed_in_dashboard_shows_nine_tiles_and_five_tabs() {
    let html = render_dashboard(Some(Session::new("+261341234567")));

    assert_eq!(html.matches("\"dashboard-tile\"").count(), 9, "{html}");
    assert_eq!(html.matches("\"bottom-tabs__tab").count(), 5, "{html}");
    assert_eq!(html.matches("bottom-tabs__tab--active").count(), 1);
    assert!(html.contains("+261341234567"));
    assert!(html.contains("href=\"/invest\""));
    assert!(!html.contains("dashboard__error"));
}

#[test]
fn dashboard_without_session_renders_no_navigation() {
    let html = render_dashboard(None);

    assert!(!html.contains("dashboard-tile"), "{html}");
    assert!(!html.contains("bottom-tabs"), "{html}");
}
