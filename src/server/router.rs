//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here together with their OpenAPI specifications.
//! Swagger UI serves the generated document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so utoipa documents each method under
/// the same path item. The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>`; callers supply the state and the session layer.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, auth }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Strata", description = "Strata building management API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::apartment::APARTMENT_TAG, description = "Apartment registry"),
        (name = controller::fee::FEE_TAG, description = "Fee categories and monthly fees"),
        (name = controller::payment::PAYMENT_TAG, description = "Payment records"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Dashboard notifications"),
        (name = controller::report::REPORT_TAG, description = "Financial reports"),
        (name = controller::settings::SETTINGS_TAG, description = "Building settings"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::apartment::list_apartments,
            controller::apartment::create_apartment
        ))
        .routes(routes!(controller::apartment::search_apartments))
        .routes(routes!(controller::apartment::list_apartments_by_floor))
        .routes(routes!(
            controller::apartment::get_apartment,
            controller::apartment::update_apartment,
            controller::apartment::delete_apartment
        ))
        .routes(routes!(
            controller::fee::list_fee_categories,
            controller::fee::create_fee_category
        ))
        .routes(routes!(controller::fee::update_fee_category))
        .routes(routes!(
            controller::fee::list_monthly_fees,
            controller::fee::create_monthly_fee
        ))
        .routes(routes!(controller::fee::update_monthly_fee))
        .routes(routes!(
            controller::payment::list_payments_by_month,
            controller::payment::create_payment
        ))
        .routes(routes!(controller::payment::list_payments_by_apartment))
        .routes(routes!(controller::notification::list_notifications))
        .routes(routes!(controller::notification::list_unread_notifications))
        .routes(routes!(controller::notification::mark_notification_read))
        .routes(routes!(controller::report::monthly_revenue))
        .routes(routes!(controller::report::collection_rate))
        .routes(routes!(controller::report::outstanding_payments))
        .routes(routes!(controller::report::overview))
        .routes(routes!(
            controller::settings::get_settings,
            controller::settings::update_settings
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
