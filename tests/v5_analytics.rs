/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{MockApi, json, not_found};
    use futures::TryStreamExt;
    use pinterest::v5::generic_requests::download_file;
    use pinterest::v5::{
        AdAnalytics, AdAnalyticsRequest, AdMetricsAsyncReport, AdsEntity, Advertisers,
        AnalyticsRequest, AppTypes, ConversionReportTime, Granularity, Level, PinAnalytics,
        PinterestError, ReportFormat, Terms, UserAnalytics, UserSplitField, WindowDays,
    };
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn echo_api() -> MockApi {
        MockApi::start(|req| json(json!({"path": req.path, "query": req.query})))
    }

    #[tokio::test]
    async fn user_analytics_query() {
        let api = echo_api();
        let analytics = UserAnalytics::new(api.client())
            .date_range("2025-01-01", "2025-01-31")
            .metrics(["IMPRESSION", "SAVE"])
            .app_types(AppTypes::Mobile)
            .split_field(UserSplitField::NoSplit);

        analytics.get(Some("ad-1")).await.unwrap();
        let req = api.last_request();
        assert_eq!(req.path, "/v5/user_account/analytics");
        let keys: Vec<&str> = req.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "start_date",
                "end_date",
                "metric_types",
                "ad_account_id",
                "app_types",
                "split_field"
            ]
        );
        assert_eq!(req.param("metric_types"), Some("IMPRESSION,SAVE"));
        assert_eq!(req.param("app_types"), Some("mobile"));

        // the ad account only applies to that request
        analytics.get(None).await.unwrap();
        assert_eq!(api.last_request().param("ad_account_id"), None);
    }

    #[tokio::test]
    async fn pin_analytics_metrics_are_optional() {
        let api = echo_api();
        PinAnalytics::new(api.client(), "555")
            .last_30_days()
            .get(None)
            .await
            .unwrap();
        let req = api.last_request();
        assert_eq!(req.path, "/v5/pins/555/analytics");
        assert_eq!(req.param("metric_types"), None);
        assert!(req.param("start_date").is_some());
    }

    #[tokio::test]
    async fn ad_analytics_requires_granularity_and_columns() {
        let api = echo_api();
        let analytics = AdAnalytics::new(api.client()).date_range("2025-01-01", "2025-01-31");
        let err = analytics.get_ad_account("1").await.unwrap_err();
        assert!(matches!(err, PinterestError::MissingAttributes(ref m) if m == &["granularity"]));

        let analytics = analytics.granularity(Granularity::Day);
        let err = analytics.get_ad_account("1").await.unwrap_err();
        assert_eq!(err.to_string(), "metrics not set");
        assert!(api.requests().is_empty());

        let analytics = analytics
            .metric("SPEND_IN_DOLLAR")
            .click_window_days(WindowDays::Seven)
            .conversion_report_time(ConversionReportTime::TimeOfConversion);
        analytics.get_campaign("1", "22").await.unwrap();
        let req = api.last_request();
        assert_eq!(req.path, "/v5/ad_accounts/1/campaigns/analytics");
        assert_eq!(req.param("campaign_ids"), Some("22"));
        assert_eq!(req.param("columns"), Some("SPEND_IN_DOLLAR"));
        assert_eq!(req.param("click_window_days"), Some("7"));
        assert_eq!(
            req.param("conversion_report_time"),
            Some("TIME_OF_CONVERSION")
        );

        analytics.get_ad_group("1", "333").await.unwrap();
        assert_eq!(api.last_request().param("ad_group_ids"), Some("333"));
        analytics.get_ad("1", "4444").await.unwrap();
        let req = api.last_request();
        assert_eq!(req.path, "/v5/ad_accounts/1/ads/analytics");
        assert_eq!(req.param("ad_ids"), Some("4444"));
    }

    #[tokio::test]
    async fn async_report_is_requested_polled_and_downloaded() {
        let polls = AtomicUsize::new(0);
        let api = MockApi::start(move |req| match (req.method.as_str(), req.path.as_str()) {
            ("POST", "/v5/ad_accounts/99/reports") => json(json!({"token": "report-token"})),
            ("GET", "/v5/ad_accounts/99/reports") => {
                if polls.fetch_add(1, Ordering::SeqCst) == 0 {
                    json(json!({"report_status": "IN_PROGRESS", "url": null}))
                } else {
                    let host = req.header("host").unwrap_or_default();
                    json(json!({
                        "report_status": "FINISHED",
                        "url": format!("http://{}/files/metrics_report.csv?signature=xyz", host)
                    }))
                }
            }
            ("GET", "/files/metrics_report.csv") => {
                rouille::Response::text("CAMPAIGN_ID,SPEND_IN_DOLLAR\n22,10.5\n")
            }
            _ => not_found(req),
        });

        let mut report = AdMetricsAsyncReport::new(api.client(), "99")
            .date_range("2025-03-01", "2025-03-31")
            .level(Level::Campaign)
            .granularity(Granularity::Total)
            .metrics(["SPEND_IN_DOLLAR"])
            .report_format(ReportFormat::Csv);
        report.run().await.unwrap();

        let requests = api.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[0].json(),
            json!({
                "start_date": "2025-03-01",
                "end_date": "2025-03-31",
                "columns": ["SPEND_IN_DOLLAR"],
                "granularity": "TOTAL",
                "level": "CAMPAIGN",
                "report_format": "CSV"
            })
        );
        assert_eq!(requests[2].param("token"), Some("report-token"));

        let filename = report.filename().unwrap();
        assert_eq!(filename, "metrics_report.csv");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(&filename);
        download_file(report.url().unwrap(), &path).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "CAMPAIGN_ID,SPEND_IN_DOLLAR\n22,10.5\n"
        );
    }

    #[tokio::test]
    async fn download_follows_storage_redirects() {
        let api = MockApi::start(|req| match req.path.as_str() {
            "/report.csv" => rouille::Response::redirect_302("/real/report.csv"),
            "/real/report.csv" => rouille::Response::text("a,b\n1,2\n"),
            _ => not_found(req),
        });
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("report.csv");
        download_file(&format!("{}/report.csv", api.uri), &path)
            .await
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2\n");
        assert_eq!(api.last_request().path, "/real/report.csv");

        let missing = dir.path().join("missing.csv");
        let err = download_file(&format!("{}/missing.csv", api.uri), &missing)
            .await
            .unwrap_err();
        assert!(matches!(err, PinterestError::Request(_)));
        assert!(!missing.exists());
    }

    #[tokio::test]
    async fn advertisers_hierarchy() {
        let api = MockApi::start(|req| match req.path.as_str() {
            "/v5/ad_accounts" => json(json!({"items": [{"id": "1", "name": "Acme"}]})),
            "/v5/ad_accounts/1/campaigns" => json(json!({
                "items": [{"id": "22", "name": "Launch", "status": "ACTIVE"}]
            })),
            "/v5/ad_accounts/1/ad_groups" => json(json!({
                "items": [{"id": "333", "name": "Group", "status": "PAUSED"}]
            })),
            "/v5/ad_accounts/1/ads" => json(json!({"items": [{"id": "4444", "name": null}]})),
            _ => not_found(req),
        });
        let advertisers = Advertisers::new(api.client());

        let accounts: Vec<AdsEntity> = advertisers.ad_accounts(None).try_collect().await.unwrap();
        assert_eq!(accounts[0].summary("Advertiser"), "Advertiser ID: 1 | Name: Acme");

        let campaigns: Vec<AdsEntity> = advertisers
            .campaigns("1", None)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(
            AdsEntity::enumeration(&campaigns, "Campaign"),
            "[1] Campaign ID: 22 | Name: Launch (ACTIVE)"
        );

        let groups: Vec<AdsEntity> = advertisers
            .ad_groups("1", "22", None)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(groups[0].status.as_deref(), Some("PAUSED"));
        assert_eq!(api.last_request().param("campaign_ids"), Some("22"));

        let ads: Vec<AdsEntity> = advertisers
            .ads("1", "22", "333", Some(&[("page_size", "10")][..]))
            .try_collect()
            .await
            .unwrap();
        assert_eq!(ads[0].summary("Ad"), "Ad ID: 4444 | Name: None");
        let req = api.last_request();
        assert_eq!(req.param("campaign_ids"), Some("22"));
        assert_eq!(req.param("ad_group_ids"), Some("333"));
        assert_eq!(req.param("page_size"), Some("10"));
    }

    #[tokio::test]
    async fn related_and_suggested_terms() {
        let api = MockApi::start(|req| match req.path.as_str() {
            "/v5/terms/related" => json(json!({
                "id": "sourdough",
                "related_term_count": 1,
                "related_terms_list": [{"term": "sourdough", "related_terms": ["starter"]}]
            })),
            "/v5/terms/suggested" => json(json!(["sourdough bread", "sourdough starter"])),
            _ => not_found(req),
        });
        let terms = Terms::new(api.client());

        let related = terms.related("sourdough,rye").await.unwrap();
        assert_eq!(api.last_request().param("terms"), Some("sourdough,rye"));
        assert!(related.to_string().contains("  Related Term: starter"));

        let suggested = terms.suggested("sourd", Some(2)).await.unwrap();
        let req = api.last_request();
        assert_eq!(req.param("term"), Some("sourd"));
        assert_eq!(req.param("limit"), Some("2"));
        assert_eq!(suggested.0.len(), 2);
        assert!(suggested.to_string().contains("Term: sourdough starter"));

        terms.suggested("rye", None).await.unwrap();
        assert_eq!(api.last_request().param("limit"), None);
    }
}
