use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::UserDto,
    },
    server::{
        controller::util::{csrf::validate_csrf, get_user::get_user_from_session},
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            session::{auth::SessionAuthCsrf, user::SessionUserId},
        },
        service::auth::{callback::CallbackService, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state echoed back by the provider
    pub state: String,
    /// Authorization code to exchange for an access token
    pub code: String,
}

/// Login route to initiate login with the authentication provider
///
/// Creates the provider's authorization URL, stores its CSRF state in the session and
/// redirects the user there.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the authentication provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.auth);

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the provider redirects to after the user logs in
///
/// Validates the CSRF state, exchanges the code for the user's profile, stores the user
/// and logs them in.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Logged in, redirect to the dashboard"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Token exchange or userinfo request failed", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let user = CallbackService::new(&state.db, &state.auth)
        .handle_callback(&params.0.code)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok(Redirect::temporary("/"))
}

/// Returns the logged in user, or `null` when nobody is logged in
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = match get_user_from_session(&state, &session).await {
        Ok(user) => Some(user),
        Err(Error::AuthError(AuthError::UserNotInSession))
        | Err(Error::AuthError(AuthError::UserNotInDatabase(_)))
        | Err(Error::DatabaseUnavailable) => None,
        Err(err) => return Err(err),
    };

    Ok(Json(user))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored fails, so only clear when logged in
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Json(SuccessDto { success: true }))
}
