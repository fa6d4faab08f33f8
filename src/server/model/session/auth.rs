//! OAuth login state kept in the session between `login` and `callback`.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for the CSRF state sent to the authentication provider.
pub const SESSION_AUTH_CSRF_KEY: &str = "strata:auth:csrf";

/// CSRF state generated when a login starts and echoed back by the provider on callback.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Stores the CSRF state, replacing any state from an earlier unfinished login.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Reads the CSRF state without consuming it.
    ///
    /// # Returns
    /// - `Ok(String)` - Stored CSRF state
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login in progress
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Removes and returns the CSRF state so it can only be used once.
    ///
    /// # Returns
    /// - `Ok(String)` - The CSRF state that was stored
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login in progress
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
