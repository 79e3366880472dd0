/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Gets an access token for the Pinterest API and checks that it works by reading the
//! user account.
//!
//! The token comes from the first source that has one: the environment variable named after
//! the token (`ACCESS_TOKEN` by default), the token file in `PINTEREST_OAUTH_TOKEN_DIR`, or the
//! browser based OAuth flow. Use `--write` to save it so the other demos can pick it up.

mod common;

use anyhow::Result;
use clap::Parser;
use common::CommonArgs;
use pinterest::v5::{AccessToken, Client, Scope, UserAccount};

#[derive(Parser, Debug)]
#[command(about = "Get a Pinterest OAuth token")]
struct Cli {
    /// Write the access token to a file
    #[arg(short = 'w', long)]
    write: bool,

    /// Print the token in clear text
    #[arg(long)]
    cleartext: bool,

    /// Comma separated list of scopes
    #[arg(short = 's', long)]
    scopes: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;

    // No scopes means the default set
    let scopes = match &args.scopes {
        Some(scopes) => Some(Scope::parse_list(scopes)?),
        None => None,
    };

    let mut access_token = AccessToken::new(&config, args.common.access_token.as_deref());
    access_token.fetch(scopes.as_deref(), true).await?;

    // Printing credentials is a bad idea, this is here to help with support requests
    if args.cleartext {
        println!("Please keep clear text tokens secure!");
        println!("clear text access token: {}", access_token.access_token()?);
    }
    println!("hashed access token: {}", access_token.hashed()?);
    match access_token.hashed_refresh_token() {
        Ok(hashed) => {
            if let Some(refresh_token) = access_token.refresh_token().filter(|_| args.cleartext) {
                println!("clear text refresh token: {}", refresh_token);
            }
            println!("hashed refresh token: {}", hashed);
        }
        Err(_) => println!("no refresh token"),
    }

    if args.write {
        println!("writing access token");
        access_token.write()?;
    }

    // Verify the token by using it
    let client = Client::new(&config, &access_token)?;
    let user = UserAccount::get(client).await?;
    println!("{}", user);
    Ok(())
}
