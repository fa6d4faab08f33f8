//! Mock OAuth provider endpoints.

use mockito::Mock;
use serde_json::json;

use crate::{
    constant::{TEST_TOKEN_PATH, TEST_USERINFO_PATH},
    TestContext,
};

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Creates the token exchange and userinfo endpoints.
    ///
    /// 1. POST token path - returns a bearer access token for any authorization code
    /// 2. GET userinfo path - returns `open_id` as the subject with a fixed name and email
    ///
    /// # Returns
    /// - `Vec<Mock>` - Token and userinfo mocks, each expecting `expected_requests` calls
    pub fn create_oauth_endpoints(&mut self, open_id: &str, expected_requests: usize) -> Vec<Mock> {
        let token = json!({
            "access_token": "mock_access_token",
            "token_type": "bearer",
            "expires_in": 3600,
        });

        let userinfo = json!({
            "sub": open_id,
            "name": "Test User",
            "email": "test@example.com",
            "login_method": "oauth",
        });

        let token_endpoint = self
            .setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token.to_string())
            .expect(expected_requests)
            .create();

        let userinfo_endpoint = self
            .setup
            .server
            .mock("GET", TEST_USERINFO_PATH)
            .match_header("authorization", "Bearer mock_access_token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(userinfo.to_string())
            .expect(expected_requests)
            .create();

        vec![token_endpoint, userinfo_endpoint]
    }
}
