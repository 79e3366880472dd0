/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Copies a pin to a board. The copy uses the largest image of the source pin, or a video
//! when `--media` names a video file or an uploaded media id.
//!
//! `--target-access-token` copies the pin into the account that owns that token.

mod common;

use anyhow::Result;
use clap::Parser;
use common::{CommonArgs, token_client};
use pinterest::v5::{Pin, Scope};

#[derive(Parser, Debug)]
#[command(about = "Copy a Pin")]
struct Cli {
    /// Source pin identifier
    #[arg(short = 'p', long = "pin-id")]
    pin_id: String,

    /// Destination board identifier
    #[arg(short = 'b', long = "board-id")]
    board_id: String,

    /// Destination board section
    #[arg(short = 's', long)]
    section: Option<String>,

    /// Video file or media id to use for the new pin
    #[arg(short = 'm', long)]
    media: Option<String>,

    /// Access token name for the destination account
    #[arg(short = 't', long = "target-access-token")]
    target_access_token: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;

    let write_scopes = [Scope::ReadBoards, Scope::WriteBoards, Scope::WritePins];
    let (source, target) = match &args.target_access_token {
        Some(target_name) => {
            let source = args.common.client(&config, &[Scope::ReadPins]).await?;
            let target = token_client(&config, Some(target_name), &write_scopes).await?;
            (source, target)
        }
        None => {
            let mut scopes = vec![Scope::ReadPins];
            scopes.extend(write_scopes);
            let client = args.common.client(&config, &scopes).await?;
            (client.clone(), client)
        }
    };

    let pin = Pin::from_id(source, &args.pin_id).await?;
    println!("source pin:");
    println!("{}", pin);

    let new_pin = pin
        .copy_to(
            target,
            &args.board_id,
            args.section.as_deref(),
            args.media.as_deref(),
        )
        .await?;
    println!("new pin:");
    println!("{}", new_pin);
    Ok(())
}
