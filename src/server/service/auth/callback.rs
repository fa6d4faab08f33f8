use entity::sea_orm_active_enums::UserRole;
use oauth2::{AuthorizationCode, TokenResponse};

use crate::server::{
    data::user::{UserIdentity, UserRepository},
    error::{auth::AuthError, Error},
    model::{
        auth::{AuthClient, ProviderIdentity},
        db::{LazyDatabase, UserModel},
    },
};

pub struct CallbackService<'a> {
    db: &'a LazyDatabase,
    auth: &'a AuthClient,
}

impl<'a> CallbackService<'a> {
    pub fn new(db: &'a LazyDatabase, auth: &'a AuthClient) -> Self {
        Self { db, auth }
    }

    /// Completes a login with the provider's authorization code.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - User created or refreshed from the provider's profile
    /// - `Err(Error::AuthError(AuthError::TokenExchangeFailed))` - Provider rejected the code
    /// - `Err(Error::HttpError)` - Userinfo request failed
    /// - `Err(Error::DatabaseUnavailable)` - Database could not be reached
    pub async fn handle_callback(&self, code: &str) -> Result<UserModel, Error> {
        let db = self.db.require().await?;

        let identity = self.fetch_identity(code).await?;

        let role = match &self.auth.owner_open_id {
            Some(owner) if *owner == identity.sub => Some(UserRole::Admin),
            _ => None,
        };

        let user = UserRepository::new(&db)
            .upsert(UserIdentity {
                open_id: identity.sub,
                name: identity.name,
                email: identity.email,
                login_method: identity.login_method,
                role,
            })
            .await?;

        tracing::info!(user_id = %user.id, role = ?user.role, "User signed in");

        Ok(user)
    }

    async fn fetch_identity(&self, code: &str) -> Result<ProviderIdentity, Error> {
        let token = self
            .auth
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.auth.http)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let identity = self
            .auth
            .http
            .get(&self.auth.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderIdentity>()
            .await?;

        Ok(identity)
    }
}
