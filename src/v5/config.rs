/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use std::path::PathBuf;
use std::time::Duration;

// The redirect uri must be literally the same as configured at
// https://developers.pinterest.com/apps/ so the port is fixed.
pub const DEFAULT_PORT: u16 = 8085;
pub const DEFAULT_API_URI: &str = "https://api.pinterest.com";
pub const DEFAULT_OAUTH_URI: &str = "https://www.pinterest.com";
pub const DEFAULT_LANDING_URI: &str = "https://developers.pinterest.com/apps/";
pub const DEFAULT_OAUTH_TOKEN_DIR: &str = ".";
pub const DEFAULT_OAUTH_TIMEOUT: Duration = Duration::from_secs(5 * 60);

const ENV_APP_ID: &str = "PINTEREST_APP_ID";
const ENV_APP_SECRET: &str = "PINTEREST_APP_SECRET";

/// Application credentials and the hosts used to talk to Pinterest.
///
/// Use [`ApiConfig::from_env`] for the usual setup where the application id and secret come
/// from `PINTEREST_APP_ID` and `PINTEREST_APP_SECRET`. Hosts can be swizzled with
/// `PINTEREST_API_URI` and `PINTEREST_OAUTH_URI`.
#[derive(Clone)]
pub struct ApiConfig {
    pub app_id: String,
    pub app_secret: String,
    pub port: u16,
    pub redirect_uri: String,
    pub landing_uri: String,
    pub oauth_token_dir: PathBuf,
    pub oauth_uri: String,
    pub api_uri: String,
    pub oauth_timeout: Duration,
}

impl ApiConfig {
    /// Creates a configuration with the default hosts for the given application
    pub fn new(app_id: &str, app_secret: &str) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            port: DEFAULT_PORT,
            redirect_uri: redirect_uri_for_port(DEFAULT_PORT),
            landing_uri: format!("{}{}", DEFAULT_LANDING_URI, app_id),
            oauth_token_dir: PathBuf::from(DEFAULT_OAUTH_TOKEN_DIR),
            oauth_uri: DEFAULT_OAUTH_URI.into(),
            api_uri: DEFAULT_API_URI.into(),
            oauth_timeout: DEFAULT_OAUTH_TIMEOUT,
        }
    }

    /// Reads the application id/secret and the optional overrides from the environment
    pub fn from_env() -> Result<Self, PinterestError> {
        let (Some(app_id), Some(app_secret)) = (env_value(ENV_APP_ID), env_value(ENV_APP_SECRET))
        else {
            return Err(PinterestError::MissingEnv(format!(
                "{} and {}",
                ENV_APP_ID, ENV_APP_SECRET
            )));
        };
        log::debug!(
            "Using application ID and secret from {} and {}.",
            ENV_APP_ID,
            ENV_APP_SECRET
        );

        let mut config = Self::new(&app_id, &app_secret);
        if let Some(landing_uri) = env_value("REDIRECT_LANDING_URI") {
            config.landing_uri = landing_uri;
        }
        if let Some(token_dir) = env_value("PINTEREST_OAUTH_TOKEN_DIR") {
            config.oauth_token_dir = token_dir.into();
        }
        if let Some(oauth_uri) = env_value("PINTEREST_OAUTH_URI") {
            config.oauth_uri = oauth_uri;
        }
        if let Some(api_uri) = env_value("PINTEREST_API_URI") {
            config.api_uri = api_uri;
        }
        Ok(config)
    }

    pub fn with_api_uri(mut self, api_uri: &str) -> Self {
        self.api_uri = api_uri.into();
        self
    }

    pub fn with_oauth_uri(mut self, oauth_uri: &str) -> Self {
        self.oauth_uri = oauth_uri.into();
        self
    }

    pub fn with_oauth_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.oauth_token_dir = dir.into();
        self
    }

    pub fn with_landing_uri(mut self, landing_uri: &str) -> Self {
        self.landing_uri = landing_uri.into();
        self
    }

    /// Changes the redirect listener port. The redirect uri follows the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self.redirect_uri = redirect_uri_for_port(port);
        self
    }

    pub fn with_oauth_timeout(mut self, timeout: Duration) -> Self {
        self.oauth_timeout = timeout;
        self
    }

    pub fn credentials_warning(&self) {
        log::warn!("This log has clear text credentials that need to be protected.");
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &"xxx")
            .field("port", &self.port)
            .field("redirect_uri", &self.redirect_uri)
            .field("landing_uri", &self.landing_uri)
            .field("oauth_token_dir", &self.oauth_token_dir)
            .field("oauth_uri", &self.oauth_uri)
            .field("api_uri", &self.api_uri)
            .finish()
    }
}

fn redirect_uri_for_port(port: u16) -> String {
    format!("http://localhost:{}/", port)
}

// Unset and empty are treated the same
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_app_id_and_port() {
        let config = ApiConfig::new("1234", "secret").with_port(9000);
        assert_eq!(config.redirect_uri, "http://localhost:9000/");
        assert_eq!(config.landing_uri, "https://developers.pinterest.com/apps/1234");
        assert_eq!(config.api_uri, DEFAULT_API_URI);
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
