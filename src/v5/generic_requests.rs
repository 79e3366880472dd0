/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
//! Requests to hosts other than the API, such as report downloads and media uploads.
//! These never carry the API credentials.
use crate::v5::api::{check, http_client};
use crate::v5::errors::PinterestError;
use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Downloads the content at the url into a file, streaming it to disk
pub async fn download_file(url: &str, path: &Path) -> Result<(), PinterestError> {
    log::debug!("GET {} to {}", url, path.display());
    let resp = download_client()?.get(url).send().await?.error_for_status()?;

    let mut file = tokio::fs::File::create(path).await?;
    let mut body = resp.bytes_stream();
    while let Some(chunk) = body.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;
    Ok(())
}

// Report urls may redirect to the storage host. No credentials are attached so following is fine.
fn download_client() -> Result<reqwest::Client, PinterestError> {
    Ok(reqwest::Client::builder().build()?)
}

/// Uploads a file in a multipart form along with the given text fields.
///
/// Used with the upload parameters handed out by the media API.
pub async fn upload_file_multipart(
    url: &str,
    path: &Path,
    params: &BTreeMap<String, String>,
) -> Result<(), PinterestError> {
    log::debug!("POST {} from {}", url, path.display());
    log::trace!("{:?}", params);

    let mut form = Form::new();
    for (name, value) in params {
        form = form.text(name.clone(), value.clone());
    }
    let data = tokio::fs::read(path).await?;
    form = form.part("file", Part::bytes(data));

    let resp = http_client()?.post(url).multipart(form).send().await?;
    check(resp).await
}
