/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::{
    AdAnalyticsRequest, AnalyticsAttributes, AnalyticsRequest, Backoff, Client, DataSource,
    EntityField, Level, ReportFormat, TagVersion,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use urlencoding::encode;

pub const REPORT_FINISHED: &str = "FINISHED";

#[derive(Deserialize, Debug)]
struct ReportRequested {
    token: String,
}

#[derive(Deserialize, Debug)]
struct ReportStatus {
    report_status: String,

    #[serde(default)]
    url: Option<String>,
}

/// A report that is requested with a POST and then polled until it is ready to download
#[derive(Debug)]
pub struct AsyncReport {
    client: Client,
    path: String,
    token: Option<String>,
    status: Option<String>,
    url: Option<String>,
    backoff: Backoff,
}

impl AsyncReport {
    pub fn new(client: Client, path: &str) -> Self {
        Self {
            client,
            path: path.to_string(),
            token: None,
            status: None,
            url: None,
            backoff: Backoff::new(),
        }
    }

    /// Starts generating the report and keeps the token used to poll for it
    pub async fn request_report<D: Serialize + ?Sized>(
        &mut self,
        data: &D,
    ) -> Result<&str, PinterestError> {
        let requested = self
            .client
            .post::<ReportRequested, _>(&self.path, data)
            .await?;
        Ok(self.token.insert(requested.token).as_str())
    }

    /// Fetches the status and, once available, the url of the report
    pub async fn poll_report(&mut self) -> Result<(), PinterestError> {
        let token = self.token.as_deref().ok_or_else(|| {
            PinterestError::InvalidArgument("the report has not been requested".into())
        })?;
        let status = self
            .client
            .get::<ReportStatus>(&self.path, Some(&[("token", token)][..]))
            .await?;
        self.status = Some(status.report_status);
        self.url = status.url;
        Ok(())
    }

    /// Polls until the report has finished, waiting longer between each poll
    pub async fn wait_report(&mut self) -> Result<(), PinterestError> {
        self.backoff.reset();
        loop {
            self.poll_report().await?;
            let status = self.status.as_deref().unwrap_or_default();
            if status == REPORT_FINISHED {
                return Ok(());
            }
            let msg = format!("Report status: {}.", status);
            self.backoff.wait(Some(&msg)).await;
        }
    }

    /// Requests the report and waits for it to be ready
    pub async fn run<D: Serialize + ?Sized>(&mut self, data: &D) -> Result<(), PinterestError> {
        self.request_report(data).await?;
        self.wait_report().await
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Name of the report file, which is the last part of the url path
    pub fn filename(&self) -> Option<String> {
        let url = url::Url::parse(self.url.as_deref()?).ok()?;
        url.path_segments()?
            .next_back()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

/// Asynchronous advertising delivery metrics report for an ad account.
///
/// ```rust,no_run
/// use pinterest::v5::{
///     AdAnalyticsRequest, AdMetricsAsyncReport, AnalyticsRequest, Client, Granularity, Level,
///     ReportFormat,
/// };
///
/// async fn report(client: Client) -> Result<(), pinterest::v5::PinterestError> {
///     let mut report = AdMetricsAsyncReport::new(client, "549755885175")
///         .last_30_days()
///         .level(Level::Campaign)
///         .granularity(Granularity::Day)
///         .metrics(["IMPRESSION_1", "CLICKTHROUGH_1"])
///         .report_format(ReportFormat::Csv);
///     report.run().await?;
///     println!("{:?}", report.url());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct AdMetricsAsyncReport {
    report: AsyncReport,
    attributes: AnalyticsAttributes,
}

impl AnalyticsRequest for AdMetricsAsyncReport {
    fn attributes(&self) -> &AnalyticsAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AnalyticsAttributes {
        &mut self.attributes
    }
}

impl AdAnalyticsRequest for AdMetricsAsyncReport {}

impl AdMetricsAsyncReport {
    pub fn new(client: Client, ad_account_id: &str) -> Self {
        let path = format!("/v5/ad_accounts/{}/reports", encode(ad_account_id));
        let mut attributes = AnalyticsAttributes::new();
        attributes.require("level");
        attributes.require("granularity");
        Self {
            report: AsyncReport::new(client, &path),
            attributes,
        }
    }

    /// Requested report type. Required.
    pub fn level(mut self, level: Level) -> Self {
        self.attributes.set("level", level.to_string());
        self
    }

    /// Extra fields included for each entity.
    ///
    /// They are named with the level as prefix in the report and can only be requested for
    /// the level and its parents.
    pub fn entity_fields(mut self, fields: &[EntityField]) -> Self {
        let fields: Vec<Value> = fields.iter().map(|f| f.to_string().into()).collect();
        self.attributes.set("entity_fields", fields);
        self
    }

    /// Filters, structured as documented for the reports API
    pub fn filters(mut self, filters: Value) -> Self {
        self.attributes.set("filters", filters);
        self
    }

    pub fn report_format(mut self, report_format: ReportFormat) -> Self {
        self.attributes
            .set("report_format", report_format.to_string());
        self
    }

    /// Pinterest Tag metrics are returned by default, version 2 gives the prior tags
    pub fn tag_version(mut self, tag_version: TagVersion) -> Self {
        self.attributes.set("tag_version", u8::from(tag_version));
        self
    }

    pub fn data_source(mut self, data_source: DataSource) -> Self {
        self.attributes.set("data_source", data_source.to_string());
        self
    }

    /// Body of the POST that requests the report
    pub fn post_data_attributes(&self) -> Result<Value, PinterestError> {
        self.attributes.data_attributes("columns", true)
    }

    pub async fn request_report(&mut self) -> Result<&str, PinterestError> {
        let data = self.post_data_attributes()?;
        self.report.request_report(&data).await
    }

    pub async fn wait_report(&mut self) -> Result<(), PinterestError> {
        self.report.wait_report().await
    }

    pub async fn run(&mut self) -> Result<(), PinterestError> {
        let data = self.post_data_attributes()?;
        self.report.run(&data).await
    }

    pub fn url(&self) -> Option<&str> {
        self.report.url()
    }

    pub fn filename(&self) -> Option<String> {
        self.report.filename()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v5::Granularity;
    use serde_json::json;

    fn report() -> AdMetricsAsyncReport {
        let client = Client::from_token("http://localhost:1", "token").unwrap();
        AdMetricsAsyncReport::new(client, "123")
    }

    #[test]
    fn level_and_granularity_are_required() {
        let report = report().date_range("2025-03-01", "2025-03-31").metric("SPEND_IN_DOLLAR");
        assert_eq!(
            report.post_data_attributes().unwrap_err().to_string(),
            "missing attributes: [\"granularity\", \"level\"]"
        );
    }

    #[test]
    fn post_data_uses_api_values() {
        let report = report()
            .date_range("2025-03-01", "2025-03-31")
            .level(Level::PinPromotion)
            .granularity(Granularity::Day)
            .metrics(["IMPRESSION_1", "CLICKTHROUGH_1"])
            .entity_fields(&[EntityField::CampaignName, EntityField::AdGroupId])
            .tag_version(TagVersion::Two)
            .report_format(ReportFormat::Json);
        assert_eq!(
            report.post_data_attributes().unwrap(),
            json!({
                "start_date": "2025-03-01",
                "end_date": "2025-03-31",
                "columns": ["CLICKTHROUGH_1", "IMPRESSION_1"],
                "entity_fields": ["CAMPAIGN_NAME", "AD_GROUP_ID"],
                "granularity": "DAY",
                "level": "PIN_PROMOTION",
                "report_format": "JSON",
                "tag_version": 2
            })
        );
    }

    #[test]
    fn filename_drops_the_query() {
        let client = Client::from_token("http://localhost:1", "token").unwrap();
        let mut report = AsyncReport::new(client, "/v5/ad_accounts/1/reports");
        assert_eq!(report.filename(), None);
        report.url = Some(
            "https://bucket.s3.amazonaws.com/async_reporting_v5/x-y-z/metrics_report.txt?X-Amz-Signature=abc"
                .into(),
        );
        assert_eq!(report.filename().as_deref(), Some("metrics_report.txt"));
    }
}
