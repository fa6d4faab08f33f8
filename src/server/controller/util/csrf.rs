use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Consumes the session CSRF state and checks it matches `csrf_state`.
///
/// # Returns
/// - `Ok(())` - States match
/// - `Err(Error::AuthError(AuthError::CsrfValidationFailed))` - States differ
/// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login in progress
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    if stored_state == csrf_state {
        return Ok(());
    }

    Err(Error::AuthError(AuthError::CsrfValidationFailed))
}
