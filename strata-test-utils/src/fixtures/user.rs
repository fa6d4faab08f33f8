use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{model::UserModel, TestContext, TestError};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a regular dashboard user.
    pub async fn insert_mock_user(&self, open_id: &str) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            open_id: ActiveValue::Set(open_id.to_string()),
            name: ActiveValue::Set(Some("Test User".to_string())),
            email: ActiveValue::Set(Some("test@example.com".to_string())),
            login_method: ActiveValue::Set(Some("oauth".to_string())),
            role: ActiveValue::Set(UserRole::User),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_signed_in: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }
}
