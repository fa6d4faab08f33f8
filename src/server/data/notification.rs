use chrono::Utc;
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

#[derive(Clone, Debug, PartialEq)]
pub struct NewNotification {
    pub kind: NotificationType,
    pub title: String,
    pub content: String,
    pub apartment_id: Option<i32>,
}

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an unread notification
    pub async fn create(
        &self,
        notification: NewNotification,
    ) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::notification::ActiveModel {
            kind: ActiveValue::Set(notification.kind),
            title: ActiveValue::Set(notification.title),
            content: ActiveValue::Set(notification.content),
            apartment_id: ActiveValue::Set(notification.apartment_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            read_at: ActiveValue::Set(None),
            ..Default::default()
        };

        notification.insert(self.db).await
    }

    /// Returns up to `limit` notifications, newest first
    pub async fn get_latest(&self, limit: u64) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Returns unread notifications, newest first
    pub async fn get_unread(&self) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::IsRead.eq(false))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks a notification as read
    ///
    /// Marking an already read notification keeps its original `read_at`. Returns
    /// `Ok(None)` if the notification does not exist.
    pub async fn mark_read(&self, id: i32) -> Result<Option<entity::notification::Model>, DbErr> {
        let notification = match entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(notification) => notification,
            None => return Ok(None),
        };

        if notification.is_read {
            return Ok(Some(notification));
        }

        let mut notification_am = notification.into_active_model();
        notification_am.is_read = ActiveValue::Set(true);
        notification_am.read_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        let notification = notification_am.update(self.db).await?;

        Ok(Some(notification))
    }
}
