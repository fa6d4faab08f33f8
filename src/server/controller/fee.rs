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
        fee::{
            CreateFeeCategoryDto, CreateMonthlyFeeDto, FeeCategoryDto, MonthlyFeeDto,
            UpdateFeeCategoryDto, UpdateMonthlyFeeDto,
        },
    },
    server::{
        controller::util::get_user::require_user, error::Error, model::app::AppState,
        service::fee::FeeService, util::time::parse_month,
    },
};

pub static FEE_TAG: &str = "fees";

/// List active fee categories
#[utoipa::path(
    get,
    path = "/api/fee-categories",
    tag = FEE_TAG,
    responses(
        (status = 200, description = "Active fee categories", body = Vec<FeeCategoryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_fee_categories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let categories = FeeService::new(&state.db).list_categories().await?;

    Ok(Json(categories))
}

/// Create a fee category
#[utoipa::path(
    post,
    path = "/api/fee-categories",
    tag = FEE_TAG,
    request_body = CreateFeeCategoryDto,
    responses(
        (status = 201, description = "Fee category created", body = FeeCategoryDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fee_category(
    State(state): State<AppState>,
    session: Session,
    Json(category): Json<CreateFeeCategoryDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let category = FeeService::new(&state.db).create_category(category).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a fee category's name, description or active flag
#[utoipa::path(
    put,
    path = "/api/fee-categories/{id}",
    tag = FEE_TAG,
    params(("id" = i32, Path, description = "Fee category ID")),
    request_body = UpdateFeeCategoryDto,
    responses(
        (status = 200, description = "Fee category updated", body = FeeCategoryDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Fee category not found", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fee_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateFeeCategoryDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let category = FeeService::new(&state.db)
        .update_category(id, changes)
        .await?;

    Ok(Json(category))
}

/// List the fees charged for a month
#[utoipa::path(
    get,
    path = "/api/monthly-fees",
    tag = FEE_TAG,
    params(MonthQuery),
    responses(
        (status = 200, description = "Fees for the month", body = Vec<MonthlyFeeDto>),
        (status = 400, description = "Malformed month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_monthly_fees(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;
    let month = parse_month(&query.month)?;

    let fees = FeeService::new(&state.db).monthly_fees(month).await?;

    Ok(Json(fees))
}

/// Set the amount charged for a fee category in a month
#[utoipa::path(
    post,
    path = "/api/monthly-fees",
    tag = FEE_TAG,
    request_body = CreateMonthlyFeeDto,
    responses(
        (status = 201, description = "Monthly fee created", body = MonthlyFeeDto),
        (status = 400, description = "Malformed month or amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Fee category not found", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_monthly_fee(
    State(state): State<AppState>,
    session: Session,
    Json(fee): Json<CreateMonthlyFeeDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let fee = FeeService::new(&state.db).create_monthly_fee(fee).await?;

    Ok((StatusCode::CREATED, Json(fee)))
}

/// Change a monthly fee's amount
#[utoipa::path(
    put,
    path = "/api/monthly-fees/{id}",
    tag = FEE_TAG,
    params(("id" = i32, Path, description = "Monthly fee ID")),
    request_body = UpdateMonthlyFeeDto,
    responses(
        (status = 200, description = "Monthly fee updated", body = MonthlyFeeDto),
        (status = 400, description = "Missing or malformed amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Monthly fee not found", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_monthly_fee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateMonthlyFeeDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let fee = FeeService::new(&state.db)
        .update_monthly_fee(id, changes)
        .await?;

    Ok(Json(fee))
}
