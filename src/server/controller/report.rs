use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MonthQuery},
        apartment::ApartmentDto,
        report::{BuildingOverviewDto, CollectionRateDto, MonthlyRevenueDto},
    },
    server::{
        controller::util::get_user::require_user, error::Error, model::app::AppState,
        service::report::ReportService, util::time::parse_month,
    },
};

pub static REPORT_TAG: &str = "reports";

/// Total collected for a month and the number of payments
#[utoipa::path(
    get,
    path = "/api/reports/monthly-revenue",
    tag = REPORT_TAG,
    params(MonthQuery),
    responses(
        (status = 200, description = "Revenue for the month", body = MonthlyRevenueDto),
        (status = 400, description = "Malformed month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn monthly_revenue(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;
    let month = parse_month(&query.month)?;

    let revenue = ReportService::new(&state.db).monthly_revenue(month).await?;

    Ok(Json(revenue))
}

/// Collected versus expected revenue for a month
#[utoipa::path(
    get,
    path = "/api/reports/collection-rate",
    tag = REPORT_TAG,
    params(MonthQuery),
    responses(
        (status = 200, description = "Collection rate for the month", body = CollectionRateDto),
        (status = 400, description = "Malformed month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn collection_rate(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;
    let month = parse_month(&query.month)?;

    let rate = ReportService::new(&state.db).collection_rate(month).await?;

    Ok(Json(rate))
}

/// Apartments without a payment for a month
#[utoipa::path(
    get,
    path = "/api/reports/outstanding-payments",
    tag = REPORT_TAG,
    params(MonthQuery),
    responses(
        (status = 200, description = "Outstanding apartments", body = Vec<ApartmentDto>),
        (status = 400, description = "Malformed month", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn outstanding_payments(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;
    let month = parse_month(&query.month)?;

    let apartments = ReportService::new(&state.db)
        .outstanding_payments(month)
        .await?;

    Ok(Json(apartments))
}

/// Building overview for the current month
#[utoipa::path(
    get,
    path = "/api/reports/overview",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Building overview", body = BuildingOverviewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn overview(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let overview = ReportService::new(&state.db).overview().await?;

    Ok(Json(overview))
}
