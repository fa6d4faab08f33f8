use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input rejected at the API boundary before reaching storage.
///
/// The `Display` text is returned to the client as-is, so messages are written for the
/// person filling in the dashboard form.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Floor number must be between 1 and 15, got {0}")]
    FloorOutOfRange(i32),
    #[error("Unit number must be between 1 and 4, got {0}")]
    UnitOutOfRange(i32),
    #[error("Amount must be a positive number with at most two decimal places, got {0:?}")]
    InvalidAmount(String),
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("Phone number must contain at least 10 digits, got {0:?}")]
    InvalidPhone(String),
    #[error("Month must be formatted as YYYY-MM or YYYY-MM-DD, got {0:?}")]
    InvalidMonth(String),
    #[error("{field} must be at least 1, got {value}")]
    NotPositive { field: &'static str, value: i32 },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request input: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
