//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

/// Address the HTTP listener binds to when `BIND_ADDRESS` is not set.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Settings for the external OAuth2 provider that authenticates dashboard users.
#[derive(Clone, Debug)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub callback_url: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Connection string for the database, when absent the database is treated as unavailable
    pub database_url: Option<String>,
    pub valkey_url: String,
    pub bind_address: String,
    /// Open ID of the building administrator, stored with the admin role on login
    pub owner_open_id: Option<String>,
    pub oauth: OAuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| optional(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let config = Self {
            database_url: optional("DATABASE_URL"),
            valkey_url: required("VALKEY_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            owner_open_id: optional("OWNER_OPEN_ID"),
            oauth: OAuthConfig {
                client_id: required("OAUTH_CLIENT_ID")?,
                client_secret: required("OAUTH_CLIENT_SECRET")?,
                auth_url: required("OAUTH_AUTH_URL")?,
                token_url: required("OAUTH_TOKEN_URL")?,
                userinfo_url: required("OAUTH_USERINFO_URL")?,
                callback_url: required("OAUTH_CALLBACK_URL")?,
            },
        };

        if config.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: format!("{:?} is not a socket address", config.bind_address),
            });
        }

        Ok(config)
    }
}
