/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::{
    AdAnalyticsRequest, AnalyticsAttributes, AnalyticsRequest, AppTypes, Client,
    FromClaimedContent, PinFormat, PinSplitField, UserSplitField,
};
use serde_json::Value;
use urlencoding::encode;

// Sends a GET with the attributes as the query
async fn request_analytics(
    client: &Client,
    path: &str,
    attributes: &AnalyticsAttributes,
    metrics_param: &str,
    metrics_required: bool,
) -> Result<Value, PinterestError> {
    let query = attributes.uri_attributes(metrics_param, metrics_required)?;
    let params: Vec<(&str, &str)> = query
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    client.get::<Value>(path, Some(params.as_slice())).await
}

// Copy of the attributes with the ad account, which only applies to one request
fn with_ad_account(
    attributes: &AnalyticsAttributes,
    ad_account_id: Option<&str>,
) -> AnalyticsAttributes {
    let mut attributes = attributes.clone();
    if let Some(ad_account_id) = ad_account_id.filter(|id| !id.is_empty()) {
        attributes.set("ad_account_id", ad_account_id);
    }
    attributes
}

/// Organic metrics for the user account.
///
/// Metrics are optional and sent as `metric_types`.
#[derive(Debug, Clone)]
pub struct UserAnalytics {
    client: Client,
    attributes: AnalyticsAttributes,
}

impl AnalyticsRequest for UserAnalytics {
    fn attributes(&self) -> &AnalyticsAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AnalyticsAttributes {
        &mut self.attributes
    }
}

impl UserAnalytics {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            attributes: AnalyticsAttributes::new(),
        }
    }

    pub fn from_claimed_content(mut self, value: FromClaimedContent) -> Self {
        self.attributes.set("from_claimed_content", value.to_string());
        self
    }

    pub fn pin_format(mut self, value: PinFormat) -> Self {
        self.attributes.set("pin_format", value.to_string());
        self
    }

    pub fn app_types(mut self, value: AppTypes) -> Self {
        self.attributes.set("app_types", value.to_string());
        self
    }

    pub fn split_field(mut self, value: UserSplitField) -> Self {
        self.attributes.set("split_field", value.to_string());
        self
    }

    /// Gets the analytics, limited to the content of an ad account when one is given
    pub async fn get(&self, ad_account_id: Option<&str>) -> Result<Value, PinterestError> {
        let attributes = with_ad_account(&self.attributes, ad_account_id);
        request_analytics(
            &self.client,
            "/v5/user_account/analytics",
            &attributes,
            "metric_types",
            false,
        )
        .await
    }
}

/// Organic metrics for a single pin
#[derive(Debug, Clone)]
pub struct PinAnalytics {
    client: Client,
    pin_id: String,
    attributes: AnalyticsAttributes,
}

impl AnalyticsRequest for PinAnalytics {
    fn attributes(&self) -> &AnalyticsAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AnalyticsAttributes {
        &mut self.attributes
    }
}

impl PinAnalytics {
    pub fn new(client: Client, pin_id: &str) -> Self {
        Self {
            client,
            pin_id: pin_id.to_string(),
            attributes: AnalyticsAttributes::new(),
        }
    }

    pub fn app_types(mut self, value: AppTypes) -> Self {
        self.attributes.set("app_types", value.to_string());
        self
    }

    pub fn split_field(mut self, value: PinSplitField) -> Self {
        self.attributes.set("split_field", value.to_string());
        self
    }

    pub async fn get(&self, ad_account_id: Option<&str>) -> Result<Value, PinterestError> {
        let attributes = with_ad_account(&self.attributes, ad_account_id);
        let path = format!("/v5/pins/{}/analytics", encode(&self.pin_id));
        request_analytics(&self.client, &path, &attributes, "metric_types", false).await
    }
}

/// Advertising delivery metrics.
///
/// Granularity and at least one metric, sent as `columns`, are required.
#[derive(Debug, Clone)]
pub struct AdAnalytics {
    client: Client,
    attributes: AnalyticsAttributes,
}

impl AnalyticsRequest for AdAnalytics {
    fn attributes(&self) -> &AnalyticsAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AnalyticsAttributes {
        &mut self.attributes
    }
}

impl AdAnalyticsRequest for AdAnalytics {}

impl AdAnalytics {
    pub fn new(client: Client) -> Self {
        let mut attributes = AnalyticsAttributes::new();
        attributes.require("granularity");
        Self { client, attributes }
    }

    async fn request(&self, path: &str) -> Result<Value, PinterestError> {
        request_analytics(&self.client, path, &self.attributes, "columns", true).await
    }

    pub async fn get_ad_account(&self, ad_account_id: &str) -> Result<Value, PinterestError> {
        let path = format!("/v5/ad_accounts/{}/analytics", encode(ad_account_id));
        self.request(&path).await
    }

    pub async fn get_campaign(
        &self,
        ad_account_id: &str,
        campaign_id: &str,
    ) -> Result<Value, PinterestError> {
        let path = format!(
            "/v5/ad_accounts/{}/campaigns/analytics?campaign_ids={}",
            encode(ad_account_id),
            encode(campaign_id)
        );
        self.request(&path).await
    }

    pub async fn get_ad_group(
        &self,
        ad_account_id: &str,
        ad_group_id: &str,
    ) -> Result<Value, PinterestError> {
        let path = format!(
            "/v5/ad_accounts/{}/ad_groups/analytics?ad_group_ids={}",
            encode(ad_account_id),
            encode(ad_group_id)
        );
        self.request(&path).await
    }

    pub async fn get_ad(&self, ad_account_id: &str, ad_id: &str) -> Result<Value, PinterestError> {
        let path = format!(
            "/v5/ad_accounts/{}/ads/analytics?ad_ids={}",
            encode(ad_account_id),
            encode(ad_id)
        );
        self.request(&path).await
    }
}
