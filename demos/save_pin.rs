/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Saves a pin to a board, optionally into one of its sections.

mod common;

use anyhow::Result;
use clap::Parser;
use common::CommonArgs;
use pinterest::v5::{Pin, Scope};

#[derive(Parser, Debug)]
#[command(about = "Save a Pin to a Board")]
struct Cli {
    /// Pin identifier
    #[arg(short = 'p', long = "pin-id")]
    pin_id: String,

    /// Board identifier
    #[arg(short = 'b', long = "board-id")]
    board_id: String,

    /// Board section identifier
    #[arg(short = 's', long)]
    section: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;
    let scopes = [
        Scope::ReadPins,
        Scope::WritePins,
        Scope::ReadBoards,
        Scope::WriteBoards,
    ];
    let client = args.common.client(&config, &scopes).await?;

    let pin = Pin::from_id(client, &args.pin_id).await?;
    let saved = pin.save(&args.board_id, args.section.as_deref()).await?;
    println!("{}", saved);
    Ok(())
}
