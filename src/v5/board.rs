/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::macros::{obj_create_from_path, obj_from_path, stream_items_from_path};
use crate::v5::parsers::{from_empty_str_to_none, from_privacy, is_none_or_empty_str};
use crate::v5::{ApiParams, Client, Pin, Privacy};
use futures::Stream;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use urlencoding::encode;

/// Holds information returned from the boards API.
///
/// See [Pinterest API Docs](https://developers.pinterest.com/docs/api/v5/#tag/boards) for more
/// details on the individual fields.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Board {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    pub id: String,

    pub name: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "from_privacy")]
    pub privacy: Option<Privacy>,

    #[serde(default)]
    pub owner: Option<BoardOwner>,

    #[serde(default)]
    pub pin_count: Option<u64>,

    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BoardOwner {
    pub username: String,
}

impl Board {
    /// Returns information for the specified board id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, PinterestError> {
        if id.is_empty() {
            return Err(PinterestError::InvalidArgument(
                "board_id must be set to get a board".into(),
            ));
        }
        let path = format!("/v5/boards/{}", encode(id));
        obj_from_path!(client, &path, Board)
    }

    /// Creates a new board owned by the account of the client
    pub async fn create(client: Client, props: &CreateBoardProps) -> Result<Self, PinterestError> {
        obj_create_from_path!(client, "/v5/boards", props, Board)
    }

    /// Deletes this board along with all of its pins
    pub async fn delete(&self) -> Result<(), PinterestError> {
        self.client()?.delete(&self.path("")).await
    }

    /// Streams the pins saved to this board
    pub fn pins(
        &self,
        params: Option<&ApiParams<'_>>,
    ) -> Result<impl Stream<Item = Result<Pin, PinterestError>> + use<>, PinterestError> {
        let client = self.client()?;
        Ok(stream_items_from_path!(client, &self.path("/pins"), params, Pin))
    }

    /// Streams the sections of this board
    pub fn sections(
        &self,
        params: Option<&ApiParams<'_>>,
    ) -> Result<impl Stream<Item = Result<BoardSection, PinterestError>> + use<>, PinterestError>
    {
        let client = self.client()?;
        Ok(stream_items_from_path!(
            client,
            &self.path("/sections"),
            params,
            BoardSection
        ))
    }

    /// Adds a section with the given name to this board
    pub async fn create_section(&self, name: &str) -> Result<BoardSection, PinterestError> {
        let client = self.client()?;
        obj_create_from_path!(
            client,
            &self.path("/sections"),
            &json!({ "name": name }),
            BoardSection
        )
    }

    /// Streams the pins saved to one section of this board
    pub fn section_pins(
        &self,
        section_id: &str,
        params: Option<&ApiParams<'_>>,
    ) -> Result<impl Stream<Item = Result<Pin, PinterestError>> + use<>, PinterestError> {
        let client = self.client()?;
        let path = self.path(&format!("/sections/{}/pins", encode(section_id)));
        Ok(stream_items_from_path!(client, &path, params, Pin))
    }

    /// Human readable identifier in the form `/<owner>/<board-name>/`
    pub fn text_id(&self) -> Result<String, PinterestError> {
        let owner = self
            .owner
            .as_ref()
            .ok_or_else(|| PinterestError::ResponseMissing("owner".into()))?;
        Ok(format!(
            "/{}/{}/",
            owner.username,
            self.name.to_lowercase().replace(' ', "-")
        ))
    }

    fn path(&self, suffix: &str) -> String {
        format!("/v5/boards/{}{}", encode(&self.id), suffix)
    }

    fn client(&self) -> Result<&Client, PinterestError> {
        self.client.as_ref().ok_or(PinterestError::ClientNotFound())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Board Summary ---")?;
        writeln!(f, "Board ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(
            f,
            "Description: {}",
            self.description.as_deref().unwrap_or("")
        )?;
        match self.privacy {
            Some(privacy) => writeln!(f, "Privacy: {}", privacy)?,
            None => writeln!(f, "Privacy: ")?,
        }
        write!(f, "--------------------")
    }
}

/// A named grouping of pins inside a board
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BoardSection {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    pub id: String,

    pub name: String,
}

impl fmt::Display for BoardSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Board Section ---")?;
        writeln!(f, "Section ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "---------------------")
    }
}

/// Properties that can be used in the creation of a Board
#[derive(Serialize, Default, Debug, Clone)]
pub struct CreateBoardProps {
    pub name: String,

    #[serde(skip_serializing_if = "is_none_or_empty_str")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
}

impl CreateBoardProps {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Properties for a new board that looks like an existing one
    pub fn from_board(board: &Board) -> Self {
        Self {
            name: board.name.clone(),
            description: board.description.clone(),
            privacy: board.privacy.filter(|p| *p != Privacy::Unknown),
        }
    }
}
