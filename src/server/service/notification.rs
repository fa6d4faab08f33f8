use crate::{
    model::notification::NotificationDto,
    server::{
        data::notification::NotificationRepository,
        error::{resource::ResourceError, Error},
        model::db::LazyDatabase,
    },
};

/// Number of notifications returned by [`NotificationService::list`].
pub const NOTIFICATION_LIST_LIMIT: u64 = 50;

pub struct NotificationService<'a> {
    db: &'a LazyDatabase,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a LazyDatabase) -> Self {
        Self { db }
    }

    /// Lists the most recent notifications, newest first.
    pub async fn list(&self) -> Result<Vec<NotificationDto>, Error> {
        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let notifications = NotificationRepository::new(&db)
            .get_latest(NOTIFICATION_LIST_LIMIT)
            .await?;

        Ok(notifications.into_iter().map(NotificationDto::from).collect())
    }

    pub async fn unread(&self) -> Result<Vec<NotificationDto>, Error> {
        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let notifications = NotificationRepository::new(&db).get_unread().await?;

        Ok(notifications.into_iter().map(NotificationDto::from).collect())
    }

    pub async fn mark_read(&self, id: i32) -> Result<NotificationDto, Error> {
        let db = self.db.require().await?;

        match NotificationRepository::new(&db).mark_read(id).await? {
            Some(notification) => Ok(notification.into()),
            None => Err(ResourceError::NotificationNotFound(id).into()),
        }
    }
}
