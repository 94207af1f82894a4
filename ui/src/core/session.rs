//! The logged-in marker and its storage layout.
//!
//! Layout (shared with any future identity service):
//! - `isLoggedIn`: `"true"` while a session exists, absent otherwise
//! - `userPhone`: the normalized phone number used to sign in
//! - `userId`: reserved; cleared on logout, never written by the simulator

use super::storage::{KeyValueStore, StorageError};

pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_PHONE: &str = "userPhone";
pub const KEY_USER_ID: &str = "userId";

/// Every key owned by a session. Logout removes all of them.
pub const SESSION_KEYS: [&str; 3] = [KEY_LOGGED_IN, KEY_USER_PHONE, KEY_USER_ID];

const LOGGED_IN: &str = "true";

/// Client-side session. Trust-the-client: nothing here is signed or checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub phone: String,
    pub user_id: Option<String>,
}

impl Session {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            user_id: None,
        }
    }
}

/// Reads and writes a [`Session`] through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn backing_store(&self) -> &S {
        &self.store
    }

    /// Present iff `isLoggedIn` is `"true"`. Read failures count as absent.
    pub fn load(&self) -> Option<Session> {
        match self.try_load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("[session] could not read session flag ({err}); treating as logged out");
                None
            }
        }
    }

    fn try_load(&self) -> Result<Option<Session>, StorageError> {
        if self.store.get(KEY_LOGGED_IN)?.as_deref() != Some(LOGGED_IN) {
            return Ok(None);
        }
        let phone = self.store.get(KEY_USER_PHONE)?.unwrap_or_default();
        let user_id = self.store.get(KEY_USER_ID)?.filter(|id| !id.is_empty());
        Ok(Some(Session { phone, user_id }))
    }

    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.store.set(KEY_USER_PHONE, &session.phone)?;
        match session.user_id.as_deref() {
            Some(id) => self.store.set(KEY_USER_ID, id)?,
            None => self.store.remove(KEY_USER_ID)?,
        }
        // Written last so a partial write never looks like a session.
        self.store.set(KEY_LOGGED_IN, LOGGED_IN)?;
        tracing::info!("[session] stored session for {}", session.phone);
        Ok(())
    }

    /// Remove every session key. Keeps going after a failure and reports the first one.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in SESSION_KEYS {
            if let Err(err) = self.store.remove(key) {
                tracing::warn!("[session] failed to remove `{key}`: {err}");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => {
                tracing::info!("[session] cleared");
                Ok(())
            }
        }
    }
}
