//! OAuth2 client for the external authentication provider.

use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RedirectUrl, TokenUrl,
};
use serde::Deserialize;

use crate::server::{config::OAuthConfig, error::config::ConfigError, error::Error};

/// OAuth2 client with the authorization and token endpoints configured.
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Everything needed to log a user in through the authentication provider.
#[derive(Clone)]
pub struct AuthClient {
    pub oauth: OAuthClient,
    pub http: reqwest::Client,
    pub userinfo_url: String,
    /// Open ID promoted to the admin role on login
    pub owner_open_id: Option<String>,
}

/// Identity returned by the provider's userinfo endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderIdentity {
    #[serde(alias = "open_id", alias = "openId")]
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "loginMethod")]
    pub login_method: Option<String>,
}

impl AuthClient {
    /// Builds the OAuth2 client and the HTTP client used for token exchange and userinfo.
    ///
    /// # Returns
    /// - `Ok(AuthClient)` - All provider URLs parsed successfully
    /// - `Err(Error::ConfigError)` - One of the configured URLs is not a valid URL
    /// - `Err(Error::HttpError)` - The HTTP client could not be constructed
    pub fn new(config: &OAuthConfig, owner_open_id: Option<String>) -> Result<Self, Error> {
        let oauth = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(
                AuthUrl::new(config.auth_url.clone())
                    .map_err(|e| invalid_url("OAUTH_AUTH_URL", e))?,
            )
            .set_token_uri(
                TokenUrl::new(config.token_url.clone())
                    .map_err(|e| invalid_url("OAUTH_TOKEN_URL", e))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(config.callback_url.clone())
                    .map_err(|e| invalid_url("OAUTH_CALLBACK_URL", e))?,
            );

        // Following redirects during token exchange would allow SSRF
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            oauth,
            http,
            userinfo_url: config.userinfo_url.clone(),
            owner_open_id,
        })
    }
}

fn invalid_url(var: &str, err: oauth2::url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: err.to_string(),
    }
}
