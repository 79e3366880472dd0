/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::generic_requests::upload_file_multipart;
use crate::v5::{Backoff, Client};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;
use urlencoding::encode;

// Response to registering a media upload
#[derive(Deserialize, Debug)]
struct MediaUpload {
    media_id: String,
    upload_url: String,

    #[serde(default)]
    upload_parameters: BTreeMap<String, String>,
}

// Response to a media status request
#[derive(Deserialize, Debug)]
struct MediaStatus {
    #[serde(default)]
    status: Option<String>,
}

/// Translates a media argument into a media id.
///
/// - nothing means no video is involved
/// - the path of a readable file is uploaded and the new media id returned
/// - a string of digits is taken as an existing media id
pub async fn media_to_media_id(
    client: &Client,
    media: Option<&str>,
) -> Result<Option<String>, PinterestError> {
    let Some(media) = media.filter(|m| !m.is_empty()) else {
        return Ok(None);
    };

    let is_file = tokio::fs::metadata(media)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if is_file {
        return upload_media(client, Path::new(media)).await.map(Some);
    }
    if media.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Some(media.to_string()));
    }
    Err(PinterestError::InvalidMedia(media.to_string()))
}

/// Uploads a video file and returns the id of the registered media
pub async fn upload_media(client: &Client, path: &Path) -> Result<String, PinterestError> {
    let upload = client
        .post::<MediaUpload, _>("/v5/media", &json!({"media_type": "video"}))
        .await?;
    upload_file_multipart(&upload.upload_url, path, &upload.upload_parameters).await?;
    Ok(upload.media_id)
}

/// Polls the status of uploaded media until processing has succeeded
pub async fn check_media_id(client: &Client, media_id: &str) -> Result<(), PinterestError> {
    let path = format!("/v5/media/{}", encode(media_id));
    let mut backoff = Backoff::new();
    loop {
        let media = client.get::<MediaStatus>(&path, None).await?;
        match media.status.as_deref() {
            None | Some("") => {
                return Err(PinterestError::Media(format!(
                    "media upload {} not found",
                    media_id
                )));
            }
            Some("succeeded") => return Ok(()),
            Some("failed") => {
                return Err(PinterestError::Media(format!(
                    "media upload {} failed",
                    media_id
                )));
            }
            Some(status) => {
                let msg = format!("Media id {} status: {}.", media_id, status);
                backoff.wait(Some(&msg)).await;
            }
        }
    }
}
