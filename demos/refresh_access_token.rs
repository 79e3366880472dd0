/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Refreshes the access token stored by `get_access_token --write` and saves the result.

mod common;

use anyhow::Result;
use clap::Parser;
use common::CommonArgs;
use pinterest::v5::{AccessToken, Client, UserAccount};

#[derive(Parser, Debug)]
#[command(about = "Refresh a Pinterest OAuth token")]
struct Cli {
    /// Print the token in clear text
    #[arg(long)]
    cleartext: bool,

    /// Also get a new refresh token so that refreshing can go on indefinitely
    #[arg(long)]
    continuous: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;

    let mut access_token = AccessToken::new(&config, args.common.access_token.as_deref());
    access_token.read()?;
    access_token.refresh(args.continuous).await?;

    if args.cleartext {
        println!("Please keep clear text tokens secure!");
        println!(
            "clear text access token after refresh: {}",
            access_token.access_token()?
        );
    }
    println!("hashed access token after refresh: {}", access_token.hashed()?);
    if args.continuous {
        println!(
            "hashed refresh token after refresh: {}",
            access_token.hashed_refresh_token()?
        );
    }

    let client = Client::new(&config, &access_token)?;
    println!("{}", UserAccount::get(client).await?);

    println!("writing access token");
    access_token.write()?;
    Ok(())
}
