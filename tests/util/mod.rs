//! Helpers shared by the integration tests.

use axum::response::Response;
use serde::de::DeserializeOwned;
use strata::server::{
    config::OAuthConfig,
    model::{
        app::AppState,
        auth::AuthClient,
        db::LazyDatabase,
        session::user::{SessionUserId, SESSION_USER_ID_KEY},
    },
};
use strata_test_utils::{
    constant::{
        TEST_AUTHORIZE_PATH, TEST_CALLBACK_URL, TEST_OAUTH_CLIENT_ID, TEST_OAUTH_CLIENT_SECRET,
        TEST_OWNER_OPEN_ID, TEST_TOKEN_PATH, TEST_USERINFO_PATH,
    },
    model::UserModel,
    TestContext, TestError,
};

pub trait TestContextExt {
    /// Application state backed by the test database and the mock OAuth provider
    fn app_state(&self) -> AppState;

    /// Application state whose database can never be reached
    fn unavailable_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        AppState {
            db: LazyDatabase::from_connection(self.db.clone()),
            auth: auth_client(self),
        }
    }

    fn unavailable_app_state(&self) -> AppState {
        AppState {
            db: LazyDatabase::new(None),
            auth: auth_client(self),
        }
    }
}

fn auth_client(test: &TestContext) -> AuthClient {
    let server_url = test.server_url();

    let config = OAuthConfig {
        client_id: TEST_OAUTH_CLIENT_ID.to_string(),
        client_secret: TEST_OAUTH_CLIENT_SECRET.to_string(),
        auth_url: format!("{}{}", server_url, TEST_AUTHORIZE_PATH),
        token_url: format!("{}{}", server_url, TEST_TOKEN_PATH),
        userinfo_url: format!("{}{}", server_url, TEST_USERINFO_PATH),
        callback_url: TEST_CALLBACK_URL.to_string(),
    };

    AuthClient::new(&config, Some(TEST_OWNER_OPEN_ID.to_string()))
        .expect("Failed to build auth client")
}

/// Inserts a user and stores their ID in the test session
pub async fn login_user(test: &TestContext, open_id: &str) -> Result<UserModel, TestError> {
    let user = test.user().insert_mock_user(open_id).await?;

    test.session
        .insert(SESSION_USER_ID_KEY, SessionUserId(user.id.to_string()))
        .await?;

    Ok(user)
}

/// Reads a response body as JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
