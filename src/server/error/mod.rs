//! Error types for the Strata server application.
//!
//! Domain-specific enums (authentication, configuration, input validation, missing
//! resources) are aggregated into [`Error`]. Every error implements `IntoResponse`, so
//! controllers can return `Result<_, Error>` and let the `?` operator pick the HTTP status.

pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the Strata server application.
///
/// Uses `thiserror`'s `#[from]` attribute so that domain and library errors convert
/// automatically with `?`.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, CSRF, token exchange)
/// - Validation errors (form input rejected before it reaches storage)
/// - Resource errors (unknown ids, conflicting deletes)
/// - External library errors (database, sessions, HTTP)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, OAuth token exchange).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request input failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Requested record does not exist or cannot be changed.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// No database connection could be established for a write.
    #[error("Database is not available")]
    DatabaseUnavailable,
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// HTTP client error while talking to the authentication provider.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// I/O error binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and CSRF mismatches
/// - 401 Unauthorized - No logged in user
/// - 404 Not Found - Unknown record ids
/// - 409 Conflict - Deletes blocked by dependent records
/// - 503 Service Unavailable - Database could not be reached for a write
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::DatabaseUnavailable => {
                tracing::warn!("{}", Self::DatabaseUnavailable);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Database not available".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
