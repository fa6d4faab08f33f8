use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves the logged in user from the session and then from the database
///
/// # Returns
/// - `Ok(UserDto)` - User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))` - No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - User ID in session but not in
///   the database, the session is cleared
/// - `Err(Error::DatabaseUnavailable)` - Database could not be reached
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Guards dashboard endpoints, returning the logged in user's ID
///
/// While the database is unavailable the session's user ID is trusted so that degraded
/// reads keep working for users who were already logged in.
///
/// # Returns
/// - `Ok(i32)` - ID of the logged in user
/// - `Err(Error::AuthError(_))` - Not logged in, responds with 401 Unauthorized
pub async fn require_user(state: &AppState, session: &Session) -> Result<i32, Error> {
    match get_user_from_session(state, session).await {
        Ok(user) => Ok(user.id),
        Err(Error::DatabaseUnavailable) => match SessionUserId::get(session).await? {
            Some(user_id) => Ok(user_id),
            None => Err(Error::AuthError(AuthError::UserNotInSession)),
        },
        Err(err) => Err(err),
    }
}
