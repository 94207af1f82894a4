//! Dashboard access gate.
//!
//! A guard only: it checks that a session exists and nothing else. No roles,
//! no expiry.

use crate::core::session::{Session, SessionStore};
use crate::core::storage::{KeyValueStore, StorageError};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    RedirectToLogin,
    Open(Session),
}

pub fn gate(session: Option<&Session>) -> Gate {
    match session {
        Some(session) => Gate::Open(session.clone()),
        None => Gate::RedirectToLogin,
    }
}

/// Drop the stored session and return where to go next.
///
/// If any key survives, the caller keeps the user on the dashboard: leaving
/// would bring them back logged in on the next start.
pub fn logout<S: KeyValueStore>(sessions: &SessionStore<S>) -> Result<Route, StorageError> {
    sessions.clear().map_err(|err| {
        tracing::warn!("[session] logout left stale keys behind: {err}");
        err
    })?;
    Ok(Route::Landing {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::{KEY_LOGGED_IN, SESSION_KEYS};
    use crate::core::storage::MemoryStore;

    /// Keeps its entries; every removal fails.
    #[derive(Clone, Default)]
    struct Sticky(MemoryStore);

    impl KeyValueStore for Sticky {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set(key, value)
        }
        fn remove(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }
    }

    #[test]
    fn no_session_redirects() {
        assert_eq!(gate(None), Gate::RedirectToLogin);
    }

    #[test]
    fn session_opens_the_gate() {
        let session = Session::new("+261341234567");
        assert_eq!(gate(Some(&session)), Gate::Open(session));
    }

    #[test]
    fn logout_clears_every_key_and_goes_home() {
        let memory = MemoryStore::new();
        let sessions = SessionStore::new(memory.clone());
        sessions.save(&Session::new("+261341234567")).unwrap();
        memory.set("userId", "reserved").unwrap();

        let next = logout(&sessions).unwrap();

        assert_eq!(next.to_string(), "/");
        for key in SESSION_KEYS {
            assert_eq!(memory.get(key).unwrap(), None);
        }
        assert_eq!(gate(sessions.load().as_ref()), Gate::RedirectToLogin);
    }

    #[test]
    fn failed_logout_is_reported_and_session_survives() {
        let sticky = Sticky::default();
        let sessions = SessionStore::new(sticky.clone());
        sessions.save(&Session::new("+261341234567")).unwrap();

        let err = logout(&sessions).unwrap_err();

        assert!(matches!(err, StorageError::Write(_)));
        assert_eq!(sticky.get(KEY_LOGGED_IN).unwrap().as_deref(), Some("true"));
        assert!(matches!(gate(sessions.load().as_ref()), Gate::Open(_)));
    }
}
