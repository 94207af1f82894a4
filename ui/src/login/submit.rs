//! The asynchronous half of a login: authenticate, then persist the session.

use crate::core::auth::{Authenticator, Credentials};
use crate::core::session::{Session, SessionStore};
use crate::core::storage::KeyValueStore;

use super::LoginError;

/// Nothing is written unless authentication succeeds.
pub async fn authenticate_and_store<A, S>(
    authenticator: &A,
    sessions: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<Session, LoginError>
where
    A: Authenticator,
    S: KeyValueStore,
{
    let session = authenticator.authenticate(credentials).await.map_err(|err| {
        tracing::warn!("[login] authentication failed: {err}");
        LoginError::Failed
    })?;

    sessions.save(&session).map_err(|err| {
        tracing::warn!("[login] could not persist session: {err}");
        LoginError::Failed
    })?;

    Ok(session)
}
