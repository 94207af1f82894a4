//! Root-level context shared by every screen.
//!
//! Platform crates call [`use_app_providers`] at the top of their `App` and
//! key the router on the returned language code, so a language switch remounts
//! the routed subtree with fresh strings.

use dioxus::prelude::*;

use crate::core::auth::SimulatedAuthenticator;
use crate::core::config::AppConfig;
use crate::core::session::{Session, SessionStore};
use crate::core::storage::PlatformStore;
use crate::i18n;

/// Configuration plus the session store, provided once at the root.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub sessions: SessionStore<PlatformStore>,
}

impl AppServices {
    pub fn new(config: AppConfig) -> Self {
        let store = PlatformStore::open(&config);
        Self {
            config,
            sessions: SessionStore::new(store),
        }
    }

    pub fn authenticator(&self) -> SimulatedAuthenticator {
        SimulatedAuthenticator::from_config(&self.config)
    }
}

/// Install services, the language code signal and the session signal.
///
/// The session signal is hydrated synchronously from storage here, which is
/// what the dashboard gate reads on activation.
pub fn use_app_providers() -> Signal<String> {
    let services = use_context_provider(|| AppServices::new(AppConfig::default()));

    let lang_code = use_signal(|| {
        i18n::init();
        if let Some(locale) = i18n::restore_locale(services.sessions.backing_store()) {
            tracing::info!("[i18n] restored saved language {}", locale.code());
        }
        i18n::current_locale().code().to_string()
    });
    use_context_provider(|| lang_code);

    let session = use_signal(|| services.sessions.load());
    use_context_provider(|| session);

    lang_code
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}
