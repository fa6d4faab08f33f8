use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error, model::db::LazyDatabase},
};

/// Service for dashboard user accounts.
pub struct UserService<'a> {
    db: &'a LazyDatabase,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a LazyDatabase) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DatabaseUnavailable)` - Database could not be reached
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let db = self.db.require().await?;

        let user = UserRepository::new(&db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }
}
