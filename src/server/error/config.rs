use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration problems, read from the environment or a `.env` file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `VALKEY_URL` or `OAUTH_CLIENT_ID` is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be used, e.g. a provider URL that does not parse.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
