use dioxus::prelude::*;

use crate::components::AppShell;
use crate::views::{ComingSoon, Dashboard, Landing, Login};

/// Registration lives outside this client; it lands on the placeholder screen.
pub const REGISTER_PATH: &str = "/auth/register";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Landing {},
    #[route("/auth/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..segments")]
    ComingSoon { segments: Vec<String> },
}

impl Route {
    /// Route for a plain path. Paths no screen owns resolve to [`Route::ComingSoon`].
    pub fn resolve(path: &str) -> Self {
        path.parse().unwrap_or_else(|_| Route::ComingSoon {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}
