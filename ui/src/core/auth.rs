//! Authentication seam.
//!
//! The only implementation today is [`SimulatedAuthenticator`], which waits a
//! fixed delay and always succeeds. A network-backed implementation plugs in
//! behind the same trait.

use std::future::Future;

use thiserror::Error;

use super::config::AppConfig;
use super::phone::normalize_phone;
use super::session::Session;
use super::timing;

/// Credentials as typed into the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub phone: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),
    #[error("credentials rejected")]
    Rejected,
}

pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Session, AuthError>>;
}

/// Fixed-delay stand-in for a real sign-in endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedAuthenticator {
    pub delay_ms: u64,
}

impl SimulatedAuthenticator {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.login_delay_ms)
    }
}

impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        tracing::debug!("[auth] simulating sign-in for {}", credentials.phone);
        timing::sleep_ms(self.delay_ms).await;
        Ok(Session::new(normalize_phone(&credentials.phone)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulator_always_succeeds_with_normalized_phone() {
        let auth = SimulatedAuthenticator::new(5);
        let session = auth
            .authenticate(&Credentials {
                phone: "+261 34 123 4567".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(session, Session::new("+261341234567"));
        assert_eq!(session.user_id, None);
    }

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials {
            phone: "+261341234567".into(),
            password: "hunter2".into(),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("+261341234567"));
    }
}
