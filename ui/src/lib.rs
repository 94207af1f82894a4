//! Shared UI crate for Bitevest. Screens, routing, session handling and
//! localization live here; platform crates only launch it.

pub mod app;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod login;
pub mod routes;
pub mod views;

pub mod components {
    // Routed layout wrapping every screen (components/app_shell.rs)
    pub mod app_shell;
    pub use app_shell::AppShell;

    pub mod bottom_tabs;
    pub use bottom_tabs::BottomTabs;

    pub mod language_picker;
    pub use language_picker::LanguagePicker;
}

pub use routes::Route;

/// Unified theme, inlined by every platform so no external stylesheet is needed.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
