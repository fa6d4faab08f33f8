use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state missing from session store")]
    CsrfMissingValue,
    #[error("Failed to exchange authorization code with the authentication provider: {0}")]
    TokenExchangeFailed(String),
}

impl AuthError {
    fn unauthorized() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Please login to continue".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthorized()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::unauthorized()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfMissingValue | Self::TokenExchangeFailed(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}
