/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::macros::stream_items_from_path;
use crate::v5::{ApiParams, Client};
use futures::Stream;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

/// An ad account, campaign, ad group or ad.
///
/// These share the fields needed to list and pick them. Everything else returned by
/// the API is kept in `other`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AdsEntity {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl AdsEntity {
    /// One line description, e.g. `Campaign ID: 123 | Name: Spring (ACTIVE)`
    pub fn summary(&self, kind: &str) -> String {
        let mut summary = format!(
            "{} ID: {} | Name: {}",
            kind,
            self.id,
            self.name.as_deref().unwrap_or("None")
        );
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            summary.push_str(&format!(" ({})", status));
        }
        summary
    }

    /// Numbered list of summaries, starting at 1
    pub fn enumeration(entities: &[AdsEntity], kind: &str) -> String {
        entities
            .iter()
            .enumerate()
            .map(|(idx, entity)| format!("[{}] {}", idx + 1, entity.summary(kind)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lists the advertising entities available to the owner of the access token
#[derive(Debug, Clone)]
pub struct Advertisers {
    client: Client,
}

impl Advertisers {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Ad accounts shared with the user
    pub fn ad_accounts(
        &self,
        params: Option<&ApiParams<'_>>,
    ) -> impl Stream<Item = Result<AdsEntity, PinterestError>> + use<> {
        stream_items_from_path!(self.client, "/v5/ad_accounts", params, AdsEntity)
    }

    /// Campaigns of an ad account
    pub fn campaigns(
        &self,
        ad_account_id: &str,
        params: Option<&ApiParams<'_>>,
    ) -> impl Stream<Item = Result<AdsEntity, PinterestError>> + use<> {
        let path = format!("/v5/ad_accounts/{}/campaigns", encode(ad_account_id));
        stream_items_from_path!(self.client, &path, params, AdsEntity)
    }

    /// Ad groups of a campaign
    pub fn ad_groups(
        &self,
        ad_account_id: &str,
        campaign_id: &str,
        params: Option<&ApiParams<'_>>,
    ) -> impl Stream<Item = Result<AdsEntity, PinterestError>> + use<> {
        let path = format!(
            "/v5/ad_accounts/{}/ad_groups?campaign_ids={}",
            encode(ad_account_id),
            encode(campaign_id)
        );
        stream_items_from_path!(self.client, &path, params, AdsEntity)
    }

    /// Ads of an ad group
    pub fn ads(
        &self,
        ad_account_id: &str,
        campaign_id: &str,
        ad_group_id: &str,
        params: Option<&ApiParams<'_>>,
    ) -> impl Stream<Item = Result<AdsEntity, PinterestError>> + use<> {
        let path = format!(
            "/v5/ad_accounts/{}/ads?campaign_ids={}&ad_group_ids={}",
            encode(ad_account_id),
            encode(campaign_id),
            encode(ad_group_id)
        );
        stream_items_from_path!(self.client, &path, params, AdsEntity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_include_status_when_present() {
        let entities: Vec<AdsEntity> = serde_json::from_str(
            r#"[{"id": "1", "name": "Spring", "status": "ACTIVE", "objective_type": "AWARENESS"},
                {"id": "2", "name": "Fall"}]"#,
        )
        .unwrap();
        assert_eq!(entities[0].other["objective_type"], "AWARENESS");
        assert_eq!(
            AdsEntity::enumeration(&entities, "Campaign"),
            "[1] Campaign ID: 1 | Name: Spring (ACTIVE)\n[2] Campaign ID: 2 | Name: Fall"
        );
    }
}
