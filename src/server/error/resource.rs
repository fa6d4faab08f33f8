use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookups and mutations that reference a record which does not exist, or which cannot
/// be changed because other records depend on it.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Apartment not found")]
    ApartmentNotFound(i32),
    #[error("Fee category not found")]
    FeeCategoryNotFound(i32),
    #[error("Monthly fee not found")]
    MonthlyFeeNotFound(i32),
    #[error("Notification not found")]
    NotificationNotFound(i32),
    #[error("Apartment has recorded payments and cannot be deleted")]
    ApartmentHasPayments(i32),
}

impl ResourceError {
    fn id(&self) -> i32 {
        match self {
            Self::ApartmentNotFound(id)
            | Self::FeeCategoryNotFound(id)
            | Self::MonthlyFeeNotFound(id)
            | Self::NotificationNotFound(id)
            | Self::ApartmentHasPayments(id) => *id,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!(id = %self.id(), "{}", self);

        let status = match self {
            Self::ApartmentHasPayments(_) => StatusCode::CONFLICT,
            _ => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
