use oauth2::{CsrfToken, Scope};

use crate::server::model::auth::AuthClient;

/// Scopes requested from the authentication provider.
pub const LOGIN_SCOPES: [&str; 3] = ["openid", "profile", "email"];

/// Authorization URL and the CSRF state embedded in it.
pub struct LoginUrl {
    pub login_url: String,
    pub state: String,
}

pub fn login_service(auth: &AuthClient) -> LoginUrl {
    let (url, state) = auth
        .oauth
        .authorize_url(CsrfToken::new_random)
        .add_scopes(LOGIN_SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
        .url();

    LoginUrl {
        login_url: url.to_string(),
        state: state.secret().to_string(),
    }
}
