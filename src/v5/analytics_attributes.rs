/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
//! Attributes shared by the synchronous analytics requests and the asynchronous reports.
//!
//! Requests are configured with chained setters and the attributes are checked just before
//! they are sent.
//!
//! ```rust
//! use pinterest::v5::{AdAnalyticsRequest, AnalyticsAttributes, AnalyticsRequest, Granularity};
//!
//! #[derive(Default)]
//! struct Request(AnalyticsAttributes);
//!
//! impl AnalyticsRequest for Request {
//!     fn attributes(&self) -> &AnalyticsAttributes { &self.0 }
//!     fn attributes_mut(&mut self) -> &mut AnalyticsAttributes { &mut self.0 }
//! }
//! impl AdAnalyticsRequest for Request {}
//!
//! let request = Request::default()
//!     .date_range("2025-01-01", "2025-01-31")
//!     .metric("SPEND_IN_DOLLAR")
//!     .granularity(Granularity::Day);
//! let query = request.attributes().uri_attributes("columns", true).unwrap();
//! assert_eq!(query[2], ("columns".to_string(), "SPEND_IN_DOLLAR".to_string()));
//! ```
use crate::v5::errors::PinterestError;
use crate::v5::{ConversionReportTime, Granularity, WindowDays};
use chrono::{Days, Local, NaiveDate};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

pub const ATTR_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default)]
pub struct AnalyticsAttributes {
    start_date: Option<String>,
    end_date: Option<String>,
    metrics: BTreeSet<String>,
    attrs: BTreeMap<&'static str, Value>,
    required: BTreeSet<&'static str>,
}

impl AnalyticsAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an attribute that has to be set before the request is sent
    pub fn require(&mut self, name: &'static str) {
        self.required.insert(name);
    }

    /// Sets an attribute, replacing any earlier value
    pub fn set(&mut self, name: &'static str, value: impl Into<Value>) {
        self.attrs.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    pub fn end_date(&self) -> Option<&str> {
        self.end_date.as_deref()
    }

    /// The metrics in sorted order. An empty set is an error when metrics are required.
    pub fn metrics_array(&self, required: bool) -> Result<Option<Vec<String>>, PinterestError> {
        if self.metrics.is_empty() {
            if required {
                return Err(PinterestError::InvalidAttribute("metrics not set".into()));
            }
            return Ok(None);
        }
        Ok(Some(self.metrics.iter().cloned().collect()))
    }

    /// Checks the dates and that every required attribute has been set
    pub fn verify(&self) -> Result<(), PinterestError> {
        let start = check_date(
            "start_date",
            self.start_date.as_deref(),
            "start date not set",
        )?;
        let end = check_date("end_date", self.end_date.as_deref(), "end date not set")?;
        if start > end {
            return Err(PinterestError::InvalidAttribute(
                "start date after end date".into(),
            ));
        }

        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|name| !self.attrs.contains_key(*name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PinterestError::MissingAttributes(missing));
        }
        Ok(())
    }

    /// The attributes as query parameters.
    ///
    /// Dates come first, then the comma joined metrics under `metrics_param`, then the
    /// rest sorted by name.
    pub fn uri_attributes(
        &self,
        metrics_param: &str,
        metrics_required: bool,
    ) -> Result<Vec<(String, String)>, PinterestError> {
        self.verify()?;
        let mut attributes = self.dates();
        if let Some(metrics) = self.metrics_array(metrics_required)? {
            attributes.push((metrics_param.to_string(), metrics.join(",")));
        }
        for (name, value) in &self.attrs {
            attributes.push((name.to_string(), query_value(value)));
        }
        Ok(attributes)
    }

    /// The attributes as the JSON body of a POST, metrics as an array
    pub fn data_attributes(
        &self,
        metrics_param: &str,
        metrics_required: bool,
    ) -> Result<Value, PinterestError> {
        self.verify()?;
        let mut data: Map<String, Value> = self
            .dates()
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();
        if let Some(metrics) = self.metrics_array(metrics_required)? {
            data.insert(metrics_param.to_string(), metrics.into());
        }
        for (name, value) in &self.attrs {
            data.insert(name.to_string(), value.clone());
        }
        Ok(Value::Object(data))
    }

    fn dates(&self) -> Vec<(String, String)> {
        vec![
            (
                "start_date".to_string(),
                self.start_date.clone().unwrap_or_default(),
            ),
            (
                "end_date".to_string(),
                self.end_date.clone().unwrap_or_default(),
            ),
        ]
    }
}

fn check_date(
    name: &str,
    date: Option<&str>,
    unset: &str,
) -> Result<NaiveDate, PinterestError> {
    let date = date
        .filter(|d| !d.is_empty())
        .ok_or_else(|| PinterestError::InvalidAttribute(unset.to_string()))?;
    NaiveDate::parse_from_str(date, ATTR_DATE_FORMAT).map_err(|_| {
        PinterestError::InvalidAttribute(format!(
            "{}: {} needs to be a UTC date in YYYY-MM-DD format",
            name, date
        ))
    })
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(values) => values
            .iter()
            .map(query_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Chainable attributes common to every analytics request
pub trait AnalyticsRequest: Sized {
    fn attributes(&self) -> &AnalyticsAttributes;

    fn attributes_mut(&mut self) -> &mut AnalyticsAttributes;

    /// Report start date (UTC): YYYY-MM-DD. Required.
    fn start_date(mut self, start_date: &str) -> Self {
        self.attributes_mut().start_date = Some(start_date.to_string());
        self
    }

    /// Report end date (UTC): YYYY-MM-DD. Required.
    fn end_date(mut self, end_date: &str) -> Self {
        self.attributes_mut().end_date = Some(end_date.to_string());
        self
    }

    fn date_range(self, start_date: &str, end_date: &str) -> Self {
        self.start_date(start_date).end_date(end_date)
    }

    /// Sets the end date to today and the start date to thirty days earlier
    fn last_30_days(self) -> Self {
        let today = Local::now().date_naive();
        let start = today.checked_sub_days(Days::new(30)).unwrap_or(today);
        self.date_range(
            &start.format(ATTR_DATE_FORMAT).to_string(),
            &today.format(ATTR_DATE_FORMAT).to_string(),
        )
    }

    /// Adds metrics to the set of requested metrics
    fn metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_mut()
            .metrics
            .extend(metrics.into_iter().map(Into::into));
        self
    }

    fn metric(mut self, metric: &str) -> Self {
        self.attributes_mut().metrics.insert(metric.to_string());
        self
    }
}

/// Chainable attributes of the advertising analytics requests
pub trait AdAnalyticsRequest: AnalyticsRequest {
    /// How the metrics are broken down over the date range
    fn granularity(mut self, granularity: Granularity) -> Self {
        self.attributes_mut()
            .set("granularity", granularity.to_string());
        self
    }

    /// Attribution window for a click action, 30 days when not set
    fn click_window_days(mut self, days: WindowDays) -> Self {
        self.attributes_mut()
            .set("click_window_days", u8::from(days));
        self
    }

    /// Attribution window for saves, pin clicks and carousel card swipes, 30 days when not set
    fn engagement_window_days(mut self, days: WindowDays) -> Self {
        self.attributes_mut()
            .set("engagement_window_days", u8::from(days));
        self
    }

    /// Attribution window for a view action, 1 day when not set
    fn view_window_days(mut self, days: WindowDays) -> Self {
        self.attributes_mut()
            .set("view_window_days", u8::from(days));
        self
    }

    /// Whether conversions are reported at the time of the ad action or of the conversion
    fn conversion_report_time(mut self, report_time: ConversionReportTime) -> Self {
        self.attributes_mut()
            .set("conversion_report_time", report_time.to_string());
        self
    }
}
