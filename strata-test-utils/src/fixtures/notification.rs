use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{model::NotificationModel, TestContext, TestError};

impl TestContext {
    pub fn notification<'a>(&'a self) -> NotificationFixtures<'a> {
        NotificationFixtures { setup: self }
    }
}

pub struct NotificationFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> NotificationFixtures<'a> {
    /// Inserts a system notification created `minutes_ago` minutes in the past.
    ///
    /// Explicit ages keep ordering assertions deterministic.
    pub async fn insert_mock_notification(
        &self,
        apartment_id: Option<i32>,
        is_read: bool,
        minutes_ago: i64,
    ) -> Result<NotificationModel, TestError> {
        let created_at = Utc::now().naive_utc() - Duration::minutes(minutes_ago);

        let notification = entity::notification::ActiveModel {
            kind: ActiveValue::Set(NotificationType::SystemUpdate),
            title: ActiveValue::Set("Notice".to_string()),
            content: ActiveValue::Set(format!("Posted {} minutes ago", minutes_ago)),
            apartment_id: ActiveValue::Set(apartment_id),
            is_read: ActiveValue::Set(is_read),
            created_at: ActiveValue::Set(created_at),
            read_at: ActiveValue::Set(is_read.then_some(created_at)),
            ..Default::default()
        };

        Ok(notification.insert(&self.setup.db).await?)
    }
}
