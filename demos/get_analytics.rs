/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Fetches synchronous analytics for a user, pin, ad account, campaign, ad group or ad
//! and saves the results as JSON.
//!
//! User analytics only need the user accounts scope. Advertising analytics need a user
//! with linked ad accounts, and useful numbers need an active campaign. Entities that are
//! not given on the command line are picked interactively.

mod common;

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum, error::ErrorKind};
use common::{AdsLevel, CommonArgs, input_path_for_write};
use pinterest::v5::{
    AdAnalytics, AdAnalyticsRequest, Advertisers, AnalyticsRequest, Granularity, PinAnalytics,
    Scope, UserAccount, UserAnalytics,
};
use serde_json::Value;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
enum AnalyticsObject {
    User,
    Pin,
    AdAccountUser,
    AdAccount,
    Campaign,
    AdGroup,
    Ad,
}

impl AnalyticsObject {
    // the advertising level that the analytics are requested for
    fn ads_level(self) -> Option<AdsLevel> {
        match self {
            AnalyticsObject::User | AnalyticsObject::Pin => None,
            AnalyticsObject::AdAccountUser | AnalyticsObject::AdAccount => {
                Some(AdsLevel::AdAccount)
            }
            AnalyticsObject::Campaign => Some(AdsLevel::Campaign),
            AnalyticsObject::AdGroup => Some(AdsLevel::AdGroup),
            AnalyticsObject::Ad => Some(AdsLevel::Ad),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Get Analytics")]
struct Cli {
    /// Kind of object used to fetch analytics
    #[arg(short = 'o', long, value_enum, default_value_t = AnalyticsObject::User)]
    analytics_object: AnalyticsObject,

    /// Get analytics for this pin identifier
    #[arg(long)]
    pin_id: Option<String>,

    /// Get analytics for this ad account identifier
    #[arg(long)]
    ad_account_id: Option<String>,

    /// Get analytics for this campaign identifier
    #[arg(long)]
    campaign_id: Option<String>,

    /// Get analytics for this ad group identifier
    #[arg(long)]
    ad_group_id: Option<String>,

    /// Get analytics for this ad identifier
    #[arg(long)]
    ad_id: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    fn validate(&self) -> Option<&'static str> {
        if self.campaign_id.is_some() && self.ad_account_id.is_none() {
            return Some("Ad account identifier must be specified when using campaign identifier");
        }
        if self.ad_group_id.is_some() && self.campaign_id.is_none() {
            return Some("Campaign identifier must be specified when using ad group identifier");
        }
        if self.ad_id.is_some() && self.ad_group_id.is_none() {
            return Some("Ad group identifier must be specified when using ad identifier");
        }
        if self.analytics_object == AnalyticsObject::Pin && self.pin_id.is_none() {
            return Some("Pin analytics require a pin identifier.");
        }
        None
    }

    fn identifier(&self, level: AdsLevel) -> Option<&String> {
        match level {
            AdsLevel::AdAccount => self.ad_account_id.as_ref(),
            AdsLevel::Campaign => self.campaign_id.as_ref(),
            AdsLevel::AdGroup => self.ad_group_id.as_ref(),
            AdsLevel::Ad => self.ad_id.as_ref(),
        }
    }
}

/// Collects the identifiers from the ad account down to `target`, asking for the ones
/// missing from the command line. Returns `None` when some level has nothing to pick.
async fn find_ids(
    args: &Cli,
    advertisers: &Advertisers,
    target: AdsLevel,
) -> Result<Option<Vec<String>>> {
    let mut ids = Vec::new();
    for level in AdsLevel::ALL {
        let id = match args.identifier(level) {
            Some(id) => {
                println!("Using the {} with identifier: {}", level.kind(), id);
                id.clone()
            }
            None => {
                let entities = level.list(advertisers, &ids).await?;
                if entities.is_empty() {
                    println!("This {} has no {}s.", level.parent(), level.kind());
                    return Ok(None);
                }
                entities[level.select(&entities)?].id.clone()
            }
        };
        ids.push(id);
        if level == target {
            break;
        }
    }
    Ok(Some(ids))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    if let Some(error) = args.validate() {
        Cli::command().error(ErrorKind::ArgumentConflict, error).exit();
    }
    let config = args.common.init()?;

    let mut scopes = vec![Scope::ReadUsers];
    if args.analytics_object != AnalyticsObject::User {
        scopes.push(Scope::READ_ADVERTISERS);
    }
    let client = args.common.client(&config, &scopes).await?;

    let user = UserAccount::get(client.clone()).await?;
    println!("{}", user);

    let advertisers = Advertisers::new(client.clone());
    let ids = match args.analytics_object.ads_level() {
        Some(level) => find_ids(&args, &advertisers, level).await?,
        None => Some(Vec::new()),
    };

    let results = match (args.analytics_object, ids.as_deref()) {
        (_, None) => Value::Null,
        (AnalyticsObject::User, _) => {
            UserAnalytics::new(client)
                .last_30_days()
                .metrics(["IMPRESSION", "PIN_CLICK_RATE"])
                .get(None)
                .await?
        }
        (AnalyticsObject::Pin, _) => {
            let pin_id = args.pin_id.as_deref().unwrap_or_default();
            PinAnalytics::new(client, pin_id)
                .last_30_days()
                .metrics(["IMPRESSION", "PIN_CLICK"])
                .get(args.ad_account_id.as_deref())
                .await?
        }
        (AnalyticsObject::AdAccountUser, Some([account])) => {
            UserAnalytics::new(client)
                .last_30_days()
                .metrics(["IMPRESSION", "PIN_CLICK_RATE"])
                .get(Some(account.as_str()))
                .await?
        }
        (object, Some(ids)) => {
            let analytics = AdAnalytics::new(client)
                .last_30_days()
                .metrics(["SPEND_IN_DOLLAR", "TOTAL_CLICKTHROUGH"])
                .granularity(Granularity::Day);
            match (object, ids) {
                (AnalyticsObject::AdAccount, [account]) => {
                    analytics.get_ad_account(account).await?
                }
                (AnalyticsObject::Campaign, [account, campaign]) => {
                    analytics.get_campaign(account, campaign).await?
                }
                (AnalyticsObject::AdGroup, [account, _, group]) => {
                    analytics.get_ad_group(account, group).await?
                }
                (AnalyticsObject::Ad, [account, _, _, ad]) => analytics.get_ad(account, ad).await?,
                _ => Value::Null,
            }
        }
    };

    let empty = match &results {
        Value::Null => true,
        Value::Array(values) => values.is_empty(),
        Value::Object(values) => values.is_empty(),
        _ => false,
    };
    if empty {
        println!("There are no analytics results.");
        return Ok(());
    }

    let path = input_path_for_write(
        "Please enter a file name for the analytics output:",
        "analytics_output.json",
    )?;
    if let Some(path) = path {
        std::fs::write(&path, serde_json::to_string_pretty(&results)?)?;
    }
    Ok(())
}
