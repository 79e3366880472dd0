/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Prints a board and its sections. With `--pins` the pins on the board and in each
//! section are printed too.

mod common;

use anyhow::Result;
use clap::Parser;
use common::CommonArgs;
use futures::TryStreamExt;
use pinterest::v5::{Board, Scope};

#[derive(Parser, Debug)]
#[command(about = "Get a Board")]
struct Cli {
    /// Board identifier
    #[arg(short = 'b', long = "board-id")]
    board_id: String,

    /// Get the Pins for the Board
    #[arg(long)]
    pins: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;

    let mut scopes = vec![Scope::ReadUsers, Scope::ReadBoards];
    if args.pins {
        scopes.push(Scope::ReadPins);
    }
    let client = args.common.client(&config, &scopes).await?;

    let board = Board::from_id(client, &args.board_id).await?;
    println!("{}", board);

    if args.pins {
        let pins = board.pins(None)?;
        futures::pin_mut!(pins);
        while let Some(pin) = pins.try_next().await? {
            println!("{}", pin);
        }
    }

    let sections = board.sections(None)?;
    futures::pin_mut!(sections);
    while let Some(section) = sections.try_next().await? {
        println!("{}", section);
        if args.pins {
            let pins = board.section_pins(&section.id, None)?;
            futures::pin_mut!(pins);
            while let Some(pin) = pins.try_next().await? {
                println!("{}", pin);
            }
        }
    }
    Ok(())
}
