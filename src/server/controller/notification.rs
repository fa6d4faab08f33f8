use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, notification::NotificationDto},
    server::{
        controller::util::get_user::require_user, error::Error, model::app::AppState,
        service::notification::NotificationService,
    },
};

pub static NOTIFICATION_TAG: &str = "notifications";

/// List the latest notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Latest notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let notifications = NotificationService::new(&state.db).list().await?;

    Ok(Json(notifications))
}

/// List unread notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications/unread",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_unread_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let notifications = NotificationService::new(&state.db).unread().await?;

    Ok(Json(notifications))
}

/// Mark a notification as read
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let notification = NotificationService::new(&state.db).mark_read(id).await?;

    Ok(Json(notification))
}
