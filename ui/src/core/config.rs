//! Application configuration with compiled-in defaults.

/// Delay used by the simulated authenticator when nothing overrides it.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1_500;

/// Static configuration shared by every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How long the simulated login round trip takes.
    pub login_delay_ms: u64,
    /// File name of the native key-value store (inside the data directory).
    pub storage_file: &'static str,
    /// `ProjectDirs` identity: qualifier, organization, application.
    pub project_dirs: (&'static str, &'static str, &'static str),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: login_delay_from_env().unwrap_or(DEFAULT_LOGIN_DELAY_MS),
            storage_file: "storage.json",
            project_dirs: ("app", "Bitevest", "Bitevest"),
        }
    }
}

/// Build-time override: `BITEVEST_LOGIN_DELAY_MS=0 dx serve` for quick manual runs.
fn login_delay_from_env() -> Option<u64> {
    option_env!("BITEVEST_LOGIN_DELAY_MS").and_then(parse_delay)
}

fn parse_delay(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_override() {
        assert_eq!(parse_delay(" 250 "), Some(250));
        assert_eq!(parse_delay("soon"), None);
    }

    #[test]
    fn storage_file_is_json() {
        assert!(AppConfig::default().storage_file.ends_with(".json"));
    }
}
