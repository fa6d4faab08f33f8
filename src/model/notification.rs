use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::NotificationType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub content: String,
    pub apartment_id: Option<i32>,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub read_at: Option<NaiveDateTime>,
}

impl From<entity::notification::Model> for NotificationDto {
    fn from(notification: entity::notification::Model) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind,
            title: notification.title,
            content: notification.content,
            apartment_id: notification.apartment_id,
            is_read: notification.is_read,
            created_at: notification.created_at,
            read_at: notification.read_at,
        }
    }
}
