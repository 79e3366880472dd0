/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Requests an asynchronous delivery metrics report for one of the user's ad accounts,
//! waits for it and downloads the result.

mod common;

use anyhow::{Result, bail};
use clap::Parser;
use common::{AdsLevel, CommonArgs, input_path_for_write};
use pinterest::v5::generic_requests::download_file;
use pinterest::v5::{
    AdAnalyticsRequest, AdMetricsAsyncReport, Advertisers, AnalyticsRequest, Granularity, Level,
    Scope, TagVersion, UserAccount,
};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(about = "Asynchronous Analytics Report Example")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;
    let client = args
        .common
        .client(&config, &[Scope::ReadUsers, Scope::READ_ADVERTISERS])
        .await?;

    let user = UserAccount::get(client.clone()).await?;
    println!("{}", user);
    if let Some(user_id) = &user.id {
        println!("User id: {}", user_id);
    }

    let advertisers = Advertisers::new(client.clone());
    let accounts = AdsLevel::AdAccount.list(&advertisers, &[]).await?;
    if accounts.is_empty() {
        bail!("This user has no ad accounts.");
    }
    let advertiser_id = &accounts[AdsLevel::AdAccount.select(&accounts)?].id;

    println!("Requesting report for advertiser id {}...", advertiser_id);
    let mut report = AdMetricsAsyncReport::new(client, advertiser_id)
        .last_30_days()
        .level(Level::PinPromotion)
        .granularity(Granularity::Day)
        .metrics(["IMPRESSION_1", "CLICKTHROUGH_1"])
        .tag_version(TagVersion::Three);
    report.run().await?;

    let (Some(url), Some(filename)) = (report.url(), report.filename()) else {
        bail!("the report finished without a download URL");
    };
    let path = input_path_for_write("Please enter a file name for the report:", &filename)?;
    if let Some(path) = path {
        download_file(url, Path::new(&path)).await?;
    }
    Ok(())
}
