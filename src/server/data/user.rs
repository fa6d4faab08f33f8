use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Profile reported by the authentication provider for a signed in user.
#[derive(Clone, Debug, PartialEq)]
pub struct UserIdentity {
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    /// Role to assign, `None` keeps the stored role (or `User` for new users)
    pub role: Option<UserRole>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_open_id(
        &self,
        open_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::OpenId.eq(open_id))
            .one(self.db)
            .await
    }

    /// Creates or refreshes the user with the identity's open ID
    ///
    /// Profile fields are overwritten and `last_signed_in` is set to now.
    pub async fn upsert(&self, identity: UserIdentity) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self.get_by_open_id(&identity.open_id).await? {
            Some(user) => {
                let mut user_am = user.into_active_model();
                user_am.name = ActiveValue::Set(identity.name);
                user_am.email = ActiveValue::Set(identity.email);
                user_am.login_method = ActiveValue::Set(identity.login_method);
                if let Some(role) = identity.role {
                    user_am.role = ActiveValue::Set(role);
                }
                user_am.updated_at = ActiveValue::Set(now);
                user_am.last_signed_in = ActiveValue::Set(now);

                user_am.update(self.db).await
            }
            None => {
                let user = entity::user::ActiveModel {
                    open_id: ActiveValue::Set(identity.open_id),
                    name: ActiveValue::Set(identity.name),
                    email: ActiveValue::Set(identity.email),
                    login_method: ActiveValue::Set(identity.login_method),
                    role: ActiveValue::Set(identity.role.unwrap_or_default()),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    last_signed_in: ActiveValue::Set(now),
                    ..Default::default()
                };

                user.insert(self.db).await
            }
        }
    }
}
