/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::macros::{obj_create_from_path, obj_from_path};
use crate::v5::media::{check_media_id, media_to_media_id};
use crate::v5::parsers::{from_empty_str_to_none, is_none_or_empty_str};
use crate::v5::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use urlencoding::encode;

/// Holds information returned from the pins API.
///
/// See [Pinterest API Docs](https://developers.pinterest.com/docs/api/v5/#tag/pins) for more
/// details on the individual fields.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Pin {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    pub id: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub link: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub alt_text: Option<String>,

    #[serde(default)]
    pub board_id: Option<String>,

    #[serde(default)]
    pub board_section_id: Option<String>,

    #[serde(default)]
    pub domain: Option<String>,

    // Only set on items of a board listing. Anything other than "pin" is not a real pin.
    #[serde(default, rename = "type")]
    pub pin_type: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub media: Option<PinMedia>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PinMedia {
    #[serde(default)]
    pub media_type: Option<String>,

    #[serde(default)]
    pub images: BTreeMap<String, PinImage>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PinImage {
    #[serde(default)]
    pub width: u64,

    #[serde(default)]
    pub height: u64,

    pub url: String,
}

/// Where the content of a new pin comes from
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "source_type", rename_all = "snake_case")]
pub enum MediaSource {
    ImageUrl {
        url: String,
    },
    VideoId {
        cover_image_url: String,
        media_id: String,
    },
}

/// Properties that can be used in the creation of a Pin
#[derive(Serialize, Debug, Clone)]
pub struct CreatePinProps {
    pub board_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_section_id: Option<String>,

    pub media_source: MediaSource,

    #[serde(skip_serializing_if = "is_none_or_empty_str")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "is_none_or_empty_str")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "is_none_or_empty_str")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "is_none_or_empty_str")]
    pub alt_text: Option<String>,
}

#[derive(Serialize, Debug)]
struct SavePinProps<'a> {
    board_id: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    board_section_id: Option<&'a str>,
}

impl Pin {
    /// Returns information for the specified pin id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, PinterestError> {
        let path = format!("/v5/pins/{}", encode(id));
        obj_from_path!(client, &path, Pin)
    }

    /// Creates a new pin
    pub async fn create(client: Client, props: &CreatePinProps) -> Result<Self, PinterestError> {
        obj_create_from_path!(client, "/v5/pins", props, Pin)
    }

    /// Saves this pin to a board, optionally into one of its sections
    pub async fn save(
        &self,
        board_id: &str,
        section: Option<&str>,
    ) -> Result<Pin, PinterestError> {
        let client = self.client()?;
        let path = format!("/v5/pins/{}/save", encode(&self.id));
        let data = SavePinProps {
            board_id,
            board_section_id: section.filter(|s| !s.is_empty()),
        };
        obj_create_from_path!(client, &path, &data, Pin)
    }

    /// URL of the image with the largest width or height
    pub fn max_resolution_image_url(&self) -> Option<&str> {
        let mut max_res = 0;
        let mut url = None;
        for image in self.media.iter().flat_map(|m| m.images.values()) {
            if image.width > max_res {
                max_res = image.width;
                url = Some(image.url.as_str());
            }
            if image.height > max_res {
                max_res = image.height;
                url = Some(image.url.as_str());
            }
        }
        url
    }

    /// Properties to create a pin that looks like this one on another board.
    ///
    /// With a media id the new pin is a video pin using this pin's image as its cover.
    pub fn copy_props(
        &self,
        board_id: &str,
        section: Option<&str>,
        media_id: Option<&str>,
    ) -> Result<CreatePinProps, PinterestError> {
        let image_url = self
            .max_resolution_image_url()
            .ok_or_else(|| PinterestError::ResponseMissing("media.images".into()))?
            .to_string();
        let media_source = match media_id {
            Some(media_id) => MediaSource::VideoId {
                cover_image_url: image_url,
                media_id: media_id.to_string(),
            },
            None => MediaSource::ImageUrl { url: image_url },
        };
        Ok(CreatePinProps {
            board_id: board_id.to_string(),
            board_section_id: section.filter(|s| !s.is_empty()).map(str::to_string),
            media_source,
            link: self.link.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            alt_text: self.alt_text.clone(),
        })
    }

    /// Creates a copy of this pin on a board using the given client.
    ///
    /// `media` may be the path to a video file to upload or an existing media id, in which
    /// case the copy is a video pin. The media has to finish processing before the pin is
    /// created.
    pub async fn copy_to(
        &self,
        client: Client,
        board_id: &str,
        section: Option<&str>,
        media: Option<&str>,
    ) -> Result<Pin, PinterestError> {
        let media_id = media_to_media_id(&client, media).await?;
        if let Some(media_id) = &media_id {
            check_media_id(&client, media_id).await?;
        }
        let props = self.copy_props(board_id, section, media_id.as_deref())?;
        Self::create(client, &props).await
    }

    /// True unless the listing marked this item as something other than a pin
    pub fn is_pin(&self) -> bool {
        self.pin_type.as_deref().is_none_or(|t| t == "pin")
    }

    fn client(&self) -> Result<&Client, PinterestError> {
        self.client.as_ref().ok_or(PinterestError::ClientNotFound())
    }
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Pin Summary ---")?;
        writeln!(f, "Pin ID: {}", self.id)?;
        writeln!(f, "Title: {}", or_none(&self.title))?;
        writeln!(f, "Description: {}", or_none(&self.description))?;
        writeln!(f, "Link: {}", or_none(&self.link))?;
        writeln!(f, "Section ID: {}", or_none(&self.board_section_id))?;
        writeln!(f, "Domain: {}", or_none(&self.domain))?;
        write!(f, "--------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_pin() -> Pin {
        serde_json::from_value(json!({
            "id": "813",
            "title": "",
            "description": "Pickled peppers",
            "link": "https://example.com/peppers",
            "media": {
                "media_type": "image",
                "images": {
                    "150x150": {"width": 150, "height": 150, "url": "https://i/150.jpg"},
                    "1200x": {"width": 1200, "height": 900, "url": "https://i/1200.jpg"},
                    "600x": {"width": 600, "height": 1400, "url": "https://i/600.jpg"}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn max_resolution_considers_height_and_width() {
        assert_eq!(
            sample_pin().max_resolution_image_url(),
            Some("https://i/600.jpg")
        );
    }

    #[test]
    fn copy_props_build_image_and_video_sources() {
        let pin = sample_pin();
        let props = pin.copy_props("42", Some("7"), None).unwrap();
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({
                "board_id": "42",
                "board_section_id": "7",
                "media_source": {"source_type": "image_url", "url": "https://i/600.jpg"},
                "link": "https://example.com/peppers",
                "description": "Pickled peppers"
            })
        );

        let props = pin.copy_props("42", None, Some("12345")).unwrap();
        assert_eq!(
            serde_json::to_value(&props.media_source).unwrap(),
            json!({
                "source_type": "video_id",
                "cover_image_url": "https://i/600.jpg",
                "media_id": "12345"
            })
        );
    }

    #[test]
    fn only_pin_items_are_pins() {
        let mut pin = sample_pin();
        assert!(pin.is_pin());
        pin.pin_type = Some("story".into());
        assert!(!pin.is_pin());
    }
}
