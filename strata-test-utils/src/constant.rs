//! Placeholder OAuth settings shared by tests.
//!
//! None of these are real credentials. Paths are relative to the mock server URL.

/// Mock OAuth2 client ID.
pub static TEST_OAUTH_CLIENT_ID: &str = "strata_client_id";

/// Mock OAuth2 client secret.
pub static TEST_OAUTH_CLIENT_SECRET: &str = "strata_client_secret";

/// Callback URL registered with the mock provider.
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// Authorization endpoint path on the mock provider.
pub static TEST_AUTHORIZE_PATH: &str = "/oauth/authorize";

/// Token exchange endpoint path on the mock provider.
pub static TEST_TOKEN_PATH: &str = "/oauth/token";

/// Userinfo endpoint path on the mock provider.
pub static TEST_USERINFO_PATH: &str = "/oauth/userinfo";

/// Open ID configured as the building owner in tests.
pub static TEST_OWNER_OPEN_ID: &str = "owner-open-id";
