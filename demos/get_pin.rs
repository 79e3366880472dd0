/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Prints the information associated with a pin. Pin identifiers can be found with
//! `get_user_pins` or `get_board --pins`.

mod common;

use anyhow::Result;
use clap::Parser;
use common::CommonArgs;
use pinterest::v5::{Pin, Scope};

#[derive(Parser, Debug)]
#[command(about = "Get a Pin")]
struct Cli {
    /// Pin identifier
    #[arg(short = 'p', long = "pin-id")]
    pin_id: String,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;
    let client = args.common.client(&config, &[Scope::ReadPins]).await?;

    let pin = Pin::from_id(client, &args.pin_id).await?;
    println!("{}", pin);
    Ok(())
}
