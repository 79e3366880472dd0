/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum PinterestError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("API Response is a too many requests error")]
    RateLimit,

    #[error("API Response is a too many requests error due to spam: {0}")]
    Spam(String),

    #[error("request failed with reason: {reason} (status: {status}, msg: {message})")]
    ApiResponse {
        status: u16,
        reason: String,
        message: String,
    },

    #[error("response does not have valid json content: {0}")]
    MalformedResponse(String),

    #[error("Expected response field missing: {0}")]
    ResponseMissing(String),

    #[error("{0} must be set in the environment")]
    MissingEnv(String),

    #[error("missing attributes: {0:?}")]
    MissingAttributes(Vec<String>),

    #[error("{0}")]
    InvalidAttribute(String),

    #[error("Authorization error. {0}")]
    Auth(String),

    #[error("AccessToken does not have a refresh token")]
    MissingRefreshToken,

    #[error("invalid media: {0}")]
    InvalidMedia(String),

    #[error("Media error: {0}")]
    Media(String),

    #[error("Client not found")]
    ClientNotFound(),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
