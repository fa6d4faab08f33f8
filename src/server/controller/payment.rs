use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MonthQuery},
        payment::{CreatePaymentDto, PaymentDto},
    },
    server::{
        controller::util::get_user::require_user, error::Error, model::app::AppState,
        service::payment::PaymentService, util::time::parse_month,
    },
};

pub static PAYMENT_TAG: &str = "payments";

/// List payments recorded for a month
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    params(MonthQuery),
    responses(
        (status = 200, description = "Payments for the month", body = Vec<PaymentDto>),
        (status = 400, description = "Malformed month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_payments_by_month(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;
    let month = parse_month(&query.month)?;

    let payments = PaymentService::new(&state.db).by_month(month).await?;

    Ok(Json(payments))
}

/// List an apartment's payments, newest month first
#[utoipa::path(
    get,
    path = "/api/payments/apartment/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Apartment ID")),
    responses(
        (status = 200, description = "Payments for the apartment", body = Vec<PaymentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_payments_by_apartment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let payments = PaymentService::new(&state.db).by_apartment(id).await?;

    Ok(Json(payments))
}

/// Record a payment
///
/// A `payment_received` notification for the same apartment is created alongside it.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Malformed month, date or amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    session: Session,
    Json(payment): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let payment = PaymentService::new(&state.db).create(payment).await?;

    Ok((StatusCode::CREATED, Json(payment)))
}
