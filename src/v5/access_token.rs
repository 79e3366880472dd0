/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::api::{http_client, unpack};
use crate::v5::errors::PinterestError;
use crate::v5::{ApiConfig, Scope};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_TOKEN_NAME: &str = "access_token";
const OAUTH_TOKEN_PATH: &str = "/v5/oauth/token";

/// OAuth access token (and refresh token) for a Pinterest user.
///
/// The token has a name which determines both the environment variable it may be read from
/// (the upper case name) and the file it is stored in (`<oauth_token_dir>/<name>.json`).
#[derive(Clone)]
pub struct AccessToken {
    config: ApiConfig,
    name: String,
    path: PathBuf,
    auth_header: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
    scopes: Option<String>,
}

impl AccessToken {
    pub fn new(config: &ApiConfig, name: Option<&str>) -> Self {
        let name = name.unwrap_or(DEFAULT_TOKEN_NAME).to_string();
        let path = config.oauth_token_dir.join(format!("{}.json", name));

        // Client credentials go in a basic auth header for the token endpoint
        let auth = format!("{}:{}", config.app_id, config.app_secret);
        let auth_header = format!("Basic {}", STANDARD.encode(auth.as_bytes()));

        Self {
            config: config.clone(),
            name,
            path,
            auth_header,
            access_token: None,
            refresh_token: None,
            scopes: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scopes(&self) -> Option<&str> {
        self.scopes.as_deref()
    }

    /// The clear text access token. Fails when no token has been fetched yet.
    pub fn access_token(&self) -> Result<&str, PinterestError> {
        self.access_token
            .as_deref()
            .ok_or_else(|| PinterestError::Auth(format!("{} has not been fetched", self.name)))
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Gets the token using the first method that works.
    ///
    /// 1. The process environment variable that is the upper case of the token name
    /// 2. The JSON file for this token in the configured OAuth token directory
    /// 3. The OAuth 2.0 flow using the default browser and a local redirect
    pub async fn fetch(
        &mut self,
        scopes: Option<&[Scope]>,
        refreshable: bool,
    ) -> Result<(), PinterestError> {
        match self.from_environment() {
            Ok(()) => return Ok(()),
            Err(err) => log::info!(
                "reading {} from environment failed ({}), trying read",
                self.name,
                err
            ),
        }

        match self.read() {
            Ok(()) => return Ok(()),
            Err(err) => log::info!("reading {} failed ({}), trying oauth", self.name, err),
        }

        self.oauth(scopes, refreshable).await
    }

    /// Reads the token from the environment variable named after this token
    pub fn from_environment(&mut self) -> Result<(), PinterestError> {
        let env_name = self.name.to_uppercase();
        let token = std::env::var(&env_name)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(PinterestError::MissingEnv(env_name))?;
        self.access_token = Some(token);
        self.refresh_token = None;
        Ok(())
    }

    /// Reads the token from its JSON file
    pub fn read(&mut self) -> Result<(), PinterestError> {
        let reader = BufReader::new(File::open(&self.path)?);
        let data: TokenFile = serde_json::from_reader(reader)?;
        self.name = data.name.unwrap_or_else(|| DEFAULT_TOKEN_NAME.to_string());
        self.access_token = Some(data.access_token);
        self.refresh_token = data.refresh_token;
        self.scopes = data.scopes;
        log::info!("read {} from {}", self.name, self.path.display());
        Ok(())
    }

    /// Stores the token in its JSON file, readable only by the owner
    pub fn write(&self) -> Result<(), PinterestError> {
        let data = TokenFile {
            name: Some(self.name.clone()),
            access_token: self.access_token()?.to_string(),
            refresh_token: self.refresh_token.clone(),
            scopes: self.scopes.clone(),
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let file = options.open(&self.path)?;
        #[cfg(unix)]
        {
            // mode only applies when the file is created
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &data)?;
        writer.flush()?;
        Ok(())
    }

    /// Value for the `Authorization` header of API requests
    pub fn header(&self) -> Result<String, PinterestError> {
        Ok(format!("Bearer {}", self.access_token()?))
    }

    /// SHA-256 of the access token so a developer can see it change without revealing it
    pub fn hashed(&self) -> Result<String, PinterestError> {
        Ok(sha256_hex(self.access_token()?))
    }

    /// SHA-256 of the refresh token
    pub fn hashed_refresh_token(&self) -> Result<String, PinterestError> {
        self.refresh_token
            .as_deref()
            .map(sha256_hex)
            .ok_or(PinterestError::MissingRefreshToken)
    }

    /// Runs the OAuth 2.0 flow (RFC 6749) to get a new access token.
    ///
    /// Pinterest v5 requires scopes, so a default set is used when none are given. Only
    /// refreshable tokens are available.
    pub async fn oauth(
        &mut self,
        scopes: Option<&[Scope]>,
        refreshable: bool,
    ) -> Result<(), PinterestError> {
        let scopes = match scopes.filter(|s| !s.is_empty()) {
            Some(scopes) => scopes.to_vec(),
            None => {
                log::info!(
                    "v5 requires scopes for OAuth. setting to default: {}",
                    Scope::join(&Scope::DEFAULT)
                );
                Scope::DEFAULT.to_vec()
            }
        };

        if !refreshable {
            return Err(PinterestError::InvalidArgument(
                "Pinterest API v5 only provides refreshable OAuth access tokens".to_string(),
            ));
        }

        log::info!("getting auth_code...");
        let auth_code = self.auth_code(&scopes, refreshable).await?;
        log::info!("exchanging auth_code for {}...", self.name);
        self.exchange_auth_code(&auth_code).await
    }

    #[cfg(feature = "loopback")]
    async fn auth_code(
        &self,
        scopes: &[Scope],
        refreshable: bool,
    ) -> Result<String, PinterestError> {
        crate::v5::user_auth::get_auth_code(&self.config, scopes, refreshable).await
    }

    #[cfg(not(feature = "loopback"))]
    async fn auth_code(
        &self,
        _scopes: &[Scope],
        _refreshable: bool,
    ) -> Result<String, PinterestError> {
        Err(PinterestError::Auth(
            "capturing the OAuth redirect requires the loopback feature".to_string(),
        ))
    }

    /// Exchanges the auth code from the browser redirect for the access and refresh tokens
    pub async fn exchange_auth_code(&mut self, auth_code: &str) -> Result<(), PinterestError> {
        let form = [
            ("code", auth_code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];
        let resp = self.post_token_request(&form).await?;

        let scope = resp
            .scope
            .ok_or_else(|| PinterestError::ResponseMissing("scope".to_string()))?;
        log::info!("scope: {}", scope);
        self.access_token = Some(resp.access_token);
        self.refresh_token = Some(
            resp.refresh_token
                .ok_or_else(|| PinterestError::ResponseMissing("refresh_token".to_string()))?,
        );
        self.scopes = Some(scope);
        Ok(())
    }

    /// Gets a new access token using the refresh token.
    ///
    /// With `continuous` the refresh token is also refreshed, which Pinterest signals by
    /// returning a new one.
    pub async fn refresh(&mut self, continuous: bool) -> Result<(), PinterestError> {
        log::info!("refreshing {}...", self.name);
        let refresh_token = self
            .refresh_token
            .clone()
            .ok_or(PinterestError::MissingRefreshToken)?;

        let mut form = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ];
        if continuous {
            form.push(("refresh_on", "true"));
        }
        let resp = self.post_token_request(&form).await?;

        self.access_token = Some(resp.access_token);
        if let Some(refresh_token) = resp.refresh_token {
            self.refresh_token = Some(refresh_token);
        }
        Ok(())
    }

    async fn post_token_request(
        &self,
        form: &[(&str, &str)],
    ) -> Result<OAuthTokenResponse, PinterestError> {
        let token_url = format!(
            "{}{}",
            self.config.api_uri.trim_end_matches('/'),
            OAUTH_TOKEN_PATH
        );
        log::debug!("POST {}", token_url);
        if log::log_enabled!(log::Level::Trace) {
            self.config.credentials_warning();
            log::trace!("{:?}", form);
        }
        let resp = http_client()?
            .post(token_url)
            .header("Authorization", &self.auth_header)
            .form(form)
            .send()
            .await?;
        unpack(resp).await
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "xxx"))
            .field("scopes", &self.scopes)
            .finish()
    }
}

fn sha256_hex(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}

// Layout of the token file
#[derive(Serialize, Deserialize, Debug)]
struct TokenFile {
    name: Option<String>,
    access_token: String,
    refresh_token: Option<String>,
    scopes: Option<String>,
}

// Expected response from the token endpoint
#[derive(Deserialize, Debug)]
struct OAuthTokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    scope: Option<String>,
}
