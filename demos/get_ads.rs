/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Walks the advertising hierarchy of the user: ad accounts, campaigns, ad groups and ads.
//!
//! By default one entity is picked at each level and the ads below it are printed.
//! `--all-ads` prints the whole tree instead. The access token needs to belong to a user
//! with linked ad accounts.

mod common;

use anyhow::Result;
use clap::Parser;
use common::{AdsLevel, CommonArgs};
use pinterest::v5::{Advertisers, Scope, UserAccount};

#[derive(Parser, Debug)]
#[command(about = "Advertisers API Example")]
struct Cli {
    /// Print all ads information
    #[arg(long)]
    all_ads: bool,

    #[command(flatten)]
    common: CommonArgs,
}

async fn fetch_and_print(
    advertisers: &Advertisers,
    all_ads: bool,
    ids: Vec<String>,
    level: usize,
) -> Result<()> {
    let ads_level = AdsLevel::ALL[level];
    let kind = ads_level.kind();
    let entities = ads_level.list(advertisers, &ids).await?;
    let indent = if all_ads {
        "  ".repeat(level)
    } else {
        String::new()
    };
    let last = level + 1 == AdsLevel::ALL.len();

    if entities.is_empty() {
        println!("{}This {} has no {}s.", indent, ads_level.parent(), kind);
        return Ok(());
    }

    let selected = if all_ads || last {
        &entities[..]
    } else {
        let index = ads_level.select(&entities)?;
        &entities[index..=index]
    };

    for entity in selected {
        if all_ads || last {
            println!("{}{}", indent, entity.summary(kind));
        }
        if !last {
            let mut child_ids = ids.clone();
            child_ids.push(entity.id.clone());
            Box::pin(fetch_and_print(advertisers, all_ads, child_ids, level + 1)).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;

    // OAuth fails when the app has no access to the advertiser scope
    let client = args
        .common
        .client(&config, &[Scope::ReadUsers, Scope::READ_ADVERTISERS])
        .await?;

    let user = UserAccount::get(client.clone()).await?;
    println!("{}", user);

    // Users and ad accounts are one to many. Developers often get access to the brand's
    // ad account through account sharing instead of using the brand's own login.
    let advertisers = Advertisers::new(client);
    fetch_and_print(&advertisers, args.all_ads, Vec::new(), 0).await
}
