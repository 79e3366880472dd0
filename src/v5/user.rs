/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::macros::{obj_from_path, stream_items_from_path};
use crate::v5::{ApiParams, Board, Client, Pin};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::fmt;

const USER_ACCOUNT_PATH: &str = "/v5/user_account";

/// Holds information returned from the user account API.
///
/// See [Pinterest API Docs](https://developers.pinterest.com/docs/api/v5/#operation/user_account/get)
/// for more details on the individual fields.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserAccount {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub account_type: Option<String>,

    #[serde(default)]
    pub profile_image: Option<String>,

    #[serde(default)]
    pub website_url: Option<String>,

    #[serde(default)]
    pub business_name: Option<String>,

    #[serde(default)]
    pub board_count: Option<u64>,

    #[serde(default)]
    pub pin_count: Option<u64>,

    #[serde(default)]
    pub follower_count: Option<u64>,
}

impl UserAccount {
    /// Returns the account that owns the access token used by the client
    pub async fn get(client: Client) -> Result<Self, PinterestError> {
        obj_from_path!(client, USER_ACCOUNT_PATH, UserAccount)
    }

    /// Streams all of the boards owned by this user
    pub fn boards(
        &self,
        params: Option<&ApiParams<'_>>,
    ) -> Result<impl Stream<Item = Result<Board, PinterestError>> + use<>, PinterestError> {
        let client = self.client()?;
        Ok(stream_items_from_path!(client, "/v5/boards", params, Board))
    }

    /// Streams all of the pins owned by this user
    pub fn pins(
        &self,
        params: Option<&ApiParams<'_>>,
    ) -> Result<impl Stream<Item = Result<Pin, PinterestError>> + use<>, PinterestError> {
        let client = self.client()?;
        Ok(stream_items_from_path!(client, "/v5/pins", params, Pin))
    }

    fn client(&self) -> Result<&Client, PinterestError> {
        self.client.as_ref().ok_or(PinterestError::ClientNotFound())
    }
}

fn or_unset(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<not set>")
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- User Summary ---")?;
        writeln!(f, "Username: {}", or_unset(&self.username))?;
        writeln!(f, "Account Type: {}", or_unset(&self.account_type))?;
        writeln!(f, "Profile Image: {}", or_unset(&self.profile_image))?;
        writeln!(f, "Website URL: {}", or_unset(&self.website_url))?;
        write!(f, "--------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_marks_missing_fields() {
        let user: UserAccount = serde_json::from_str(
            r#"{"username": "bacon", "account_type": "BUSINESS", "profile_image": null}"#,
        )
        .unwrap();
        let summary = user.to_string();
        assert!(summary.contains("Username: bacon"));
        assert!(summary.contains("Profile Image: <not set>"));
        assert!(matches!(user.boards(None), Err(PinterestError::ClientNotFound())));
    }
}
