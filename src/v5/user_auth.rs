/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::{ApiConfig, Scope};
use rouille::Server;
use std::time::Duration;
use tokio::sync::mpsc;
use url::Url;

/// The browser side of the OAuth flow: where to send the user and the state to expect back.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    uri: Url,
    state: String,
}

impl AuthorizationRequest {
    pub fn new(
        config: &ApiConfig,
        scopes: &[Scope],
        refreshable: bool,
    ) -> Result<Self, PinterestError> {
        let state: String = rand::random::<[u8; 32]>()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();

        let mut uri = Url::parse(&format!("{}/oauth/", config.oauth_uri.trim_end_matches('/')))?;
        {
            let mut query = uri.query_pairs_mut();
            query
                .append_pair("consumer_id", &config.app_id)
                .append_pair("redirect_uri", &config.redirect_uri)
                .append_pair("response_type", "code")
                .append_pair("refreshable", if refreshable { "true" } else { "false" });
            if !scopes.is_empty() {
                query.append_pair("scope", &Scope::join(scopes));
            }
            // state last so the uri is easy to read when debugging
            query.append_pair("state", &state);
        }
        Ok(Self { uri, state })
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    // for copy and paste when no browser opens
    fn log_uri(&self) {
        log::info!("OAuth URI: {}", self.uri);
    }
}

/// One shot local server that receives the OAuth redirect
pub struct RedirectListener {
    #[allow(dead_code)]
    server_handle: std::thread::JoinHandle<()>,
    server_stop: std::sync::mpsc::Sender<()>,
    code_rx: mpsc::Receiver<Result<String, PinterestError>>,
}

impl RedirectListener {
    /// Starts listening on `localhost:<port>` for the redirect carrying `state`
    pub fn start(config: &ApiConfig, state: &str) -> Result<Self, PinterestError> {
        let (tx, code_rx) = mpsc::channel(1);
        let expected_state = state.to_string();
        let landing_uri = config.landing_uri.clone();

        let server = Server::new(("localhost", config.port), move |request| {
            handle_redirect(request, &expected_state, &landing_uri, &tx)
        })
        .map_err(|err| {
            PinterestError::Auth(format!(
                "could not listen for the OAuth redirect on port {}: {}",
                config.port, err
            ))
        })?;
        let (server_handle, server_stop) = server.stoppable();

        Ok(Self {
            server_handle,
            server_stop,
            code_rx,
        })
    }

    /// Waits for the redirect and returns the auth code, then shuts the server down
    pub async fn wait_for_code(mut self, timeout: Duration) -> Result<String, PinterestError> {
        let received = tokio::time::timeout(timeout, self.code_rx.recv()).await;
        let _ = self.server_stop.send(());
        match received {
            Ok(Some(result)) => result,
            Ok(None) => Err(PinterestError::Auth(
                "OAuth redirect listener stopped".to_string(),
            )),
            Err(_) => Err(PinterestError::Auth(
                "timed out waiting for the OAuth redirect".to_string(),
            )),
        }
    }
}

fn handle_redirect(
    request: &rouille::Request,
    expected_state: &str,
    landing_uri: &str,
    tx: &mpsc::Sender<Result<String, PinterestError>>,
) -> rouille::Response {
    let result = if request.get_param("state").as_deref() != Some(expected_state) {
        Err(PinterestError::Auth(
            "Received OAuth state does not match sent state".to_string(),
        ))
    } else {
        request.get_param("code").ok_or_else(|| {
            PinterestError::Auth("OAuth redirect does not have an auth code".to_string())
        })
    };
    // only the first redirect counts
    let _ = tx.try_send(result);

    rouille::Response::redirect_301(landing_uri.to_string())
}

/// Gets a user authentication code.
///
/// 1. Opens the authorization uri in the default browser.
/// 2. Listens on localhost for the redirect after the user approves the application.
/// 3. Checks the state and returns the code from the redirect.
pub async fn get_auth_code(
    config: &ApiConfig,
    scopes: &[Scope],
    refreshable: bool,
) -> Result<String, PinterestError> {
    let request = AuthorizationRequest::new(config, scopes, refreshable)?;
    let listener = RedirectListener::start(config, request.state())?;

    request.log_uri();
    if webbrowser::open(request.uri().as_str()).is_err() {
        log::warn!(
            "Could not open a browser. To authorize, visit:\n{}",
            request.uri()
        );
    }

    listener.wait_for_code(config.oauth_timeout).await
}
