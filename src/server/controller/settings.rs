use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        settings::{BuildingSettingsDto, UpdateBuildingSettingsDto},
    },
    server::{
        controller::util::get_user::require_user, error::Error, model::app::AppState,
        service::settings::SettingsService,
    },
};

pub static SETTINGS_TAG: &str = "settings";

/// Get the building settings, `null` until they are first saved
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Building settings", body = Option<BuildingSettingsDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let settings = SettingsService::new(&state.db).get().await?;

    Ok(Json(settings))
}

/// Create or replace the building settings
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    request_body = UpdateBuildingSettingsDto,
    responses(
        (status = 200, description = "Building settings saved", body = BuildingSettingsDto),
        (status = 400, description = "Invalid settings", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(settings): Json<UpdateBuildingSettingsDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let settings = SettingsService::new(&state.db).update(settings).await?;

    Ok(Json(settings))
}
