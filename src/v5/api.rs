/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

// Header Pinterest uses to identify a request when asking for support
pub const REQUEST_ID_HEADER: &str = "x-pinterest-rid";

/// Query parameters appended to a request path
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    api_uri: String,
    access_token: String,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client that authenticates with the given bearer token
    pub fn new(api_uri: &str, access_token: &str) -> Result<Self, PinterestError> {
        Ok(Self {
            api_uri: api_uri.trim_end_matches('/').into(),
            access_token: access_token.into(),
            https_client: http_client()?,
        })
    }

    /// Builds the full request url for a path, appending parameters to any existing query
    pub fn url(&self, path: &str, params: Option<&ApiParams<'_>>) -> Result<Url, PinterestError> {
        let mut req_url = Url::parse(&format!("{}{}", self.api_uri, path))?;
        if let Some(params) = params.filter(|p| !p.is_empty()) {
            req_url.query_pairs_mut().extend_pairs(params);
        }
        Ok(req_url)
    }

    /// Performs a get request against a fully formed url
    pub async fn get_url<T: DeserializeOwned>(&self, req_url: Url) -> Result<T, PinterestError> {
        log::debug!("GET {}", req_url);
        let resp = self
            .https_client
            .get(req_url)
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .send()
            .await?;
        unpack(resp).await
    }

    /// Performs a get request to the Pinterest API
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams<'_>>,
    ) -> Result<T, PinterestError> {
        self.get_url(self.url(path, params)?).await
    }

    /// Performs a post request with a JSON body to the Pinterest API
    pub async fn post<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &D,
    ) -> Result<T, PinterestError> {
        self.send_json(reqwest::Method::POST, path, data).await
    }

    /// Performs a put request with a JSON body to the Pinterest API
    pub async fn put<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &D,
    ) -> Result<T, PinterestError> {
        self.send_json(reqwest::Method::PUT, path, data).await
    }

    /// Performs a patch request with a JSON body to the Pinterest API
    pub async fn patch<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &D,
    ) -> Result<T, PinterestError> {
        self.send_json(reqwest::Method::PATCH, path, data).await
    }

    /// Performs a delete request. Only the status of the response is checked.
    pub async fn delete(&self, path: &str) -> Result<(), PinterestError> {
        let req_url = self.url(path, None)?;
        log::debug!("DELETE {}", req_url);
        let resp = self
            .https_client
            .delete(req_url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        check(resp).await
    }

    async fn send_json<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        data: &D,
    ) -> Result<T, PinterestError> {
        let req_url = self.url(path, None)?;
        log::debug!("{} {}", method, req_url);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", serde_json::to_string(data)?);
        }
        let resp = self
            .https_client
            .request(method, req_url)
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .json(data)
            .send()
            .await?;
        unpack(resp).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_uri", &self.api_uri)
            .field("access_token", &"xxx")
            .finish()
    }
}

// Pinterest never needs redirects to be followed and following them can leak the auth header
pub(crate) fn http_client() -> Result<reqwest::Client, PinterestError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Checks the response for errors, then deserializes its JSON body.
///
/// The body must always be JSON, even for failures, since the error details are in it.
pub(crate) async fn unpack<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, PinterestError> {
    let status = resp.status();
    let request_id = request_id(&resp);
    log_status(status);

    let text = resp.text().await?;
    let body: Value = serde_json::from_str(&text)
        .map_err(|err| PinterestError::MalformedResponse(err.to_string()))?;

    if !status.is_success() {
        log::debug!("{}: {}", REQUEST_ID_HEADER, request_id);
        log::debug!("{}", body);
        return Err(error_from_response(status, &body));
    }

    log::debug!("{}: {}", REQUEST_ID_HEADER, request_id);
    log::trace!("{}", body);
    Ok(serde_json::from_value(body)?)
}

/// Checks the response for errors without requiring a body
pub(crate) async fn check(resp: reqwest::Response) -> Result<(), PinterestError> {
    let status = resp.status();
    let request_id = request_id(&resp);
    log_status(status);
    log::debug!("{}: {}", REQUEST_ID_HEADER, request_id);

    if status.is_success() {
        return Ok(());
    }
    let body = resp
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<Value>(&text).ok())
        .unwrap_or(Value::Null);
    Err(error_from_response(status, &body))
}

/// Translates a failed status and its body into the matching error.
///
/// A 429 is a spam error when the detail mentions spam, otherwise it is a rate limit.
pub(crate) fn error_from_response(status: StatusCode, body: &Value) -> PinterestError {
    let message = body.get("message").and_then(Value::as_str);
    if status == StatusCode::TOO_MANY_REQUESTS {
        let detail = body
            .get("message_detail")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
            .or(message);
        return match detail {
            Some(detail) if detail.to_lowercase().contains("spam") => {
                PinterestError::Spam(detail.to_string())
            }
            _ => PinterestError::RateLimit,
        };
    }
    PinterestError::ApiResponse {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        message: message.unwrap_or_default().to_string(),
    }
}

fn log_status(status: StatusCode) {
    log::info!("<Response [{}]>", status.as_u16());
    if !status.is_success() {
        log::warn!(
            "request failed with reason: {}",
            status.canonical_reason().unwrap_or("Unknown")
        );
    }
}

fn request_id(resp: &reqwest::Response) -> String {
    resp.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn too_many_requests_is_classified_by_detail() {
        let spam = error_from_response(
            StatusCode::TOO_MANY_REQUESTS,
            &json!({"code": 8, "message": "slow down", "message_detail": "Flagged as SPAM"}),
        );
        assert!(matches!(spam, PinterestError::Spam(d) if d == "Flagged as SPAM"));

        let spam_in_message = error_from_response(
            StatusCode::TOO_MANY_REQUESTS,
            &json!({"message": "spam detected"}),
        );
        assert!(matches!(spam_in_message, PinterestError::Spam(_)));

        let limited = error_from_response(StatusCode::TOO_MANY_REQUESTS, &Value::Null);
        assert!(matches!(limited, PinterestError::RateLimit));
    }

    #[test]
    fn other_failures_carry_status_and_message() {
        let body = json!({"message": "Board not found."});
        let err = error_from_response(StatusCode::NOT_FOUND, &body);
        match err {
            PinterestError::ApiResponse {
                status,
                reason,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
                assert_eq!(message, "Board not found.");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn params_are_appended_to_existing_query() {
        let client = ApiClient::new("https://api.example.com/", "token").unwrap();
        let url = client
            .url("/v5/ad_accounts/1/ads?campaign_ids=2", Some(&[("page_size", "25")][..]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v5/ad_accounts/1/ads?campaign_ids=2&page_size=25"
        );
        let url = client.url("/v5/boards", Some(&[][..])).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v5/boards");
    }
}
