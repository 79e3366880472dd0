/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Deletes boards that were created for testing. Nothing is deleted until the intent has
//! been confirmed at the prompt.

mod common;

use anyhow::Result;
use clap::Parser;
use common::{CommonArgs, input_one_of};
use futures::TryStreamExt;
use pinterest::v5::{Board, Scope, UserAccount};
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
#[command(about = "Delete one Board or all Boards")]
struct Cli {
    /// Identifier of board to be deleted
    #[arg(short = 'b', long = "board-id", required_unless_present = "all_boards",
          conflicts_with = "all_boards")]
    board_id: Option<String>,

    /// Delete all boards from the account
    #[arg(long = "all-boards")]
    all_boards: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;
    let client = args
        .common
        .client(
            &config,
            &[Scope::ReadUsers, Scope::ReadBoards, Scope::WriteBoards],
        )
        .await?;

    let (boards, confirmation): (Vec<Board>, String) = match &args.board_id {
        Some(board_id) => {
            let board = Board::from_id(client, board_id).await?;
            let confirmation = format!("Delete this board: {}", board.text_id()?);
            (vec![board], confirmation)
        }
        None => {
            let user = UserAccount::get(client).await?;
            let confirmation = format!(
                "Delete all boards for {}",
                user.username.as_deref().unwrap_or_default()
            );
            (user.boards(None)?.try_collect().await?, confirmation)
        }
    };

    println!("WARNING: This script permanently deletes pins and boards from Pinterest!");
    println!("To acknowledge this warning, enter the following information at the prompt:");
    println!("   {}", confirmation);
    print!("> ");
    std::io::stdout().flush()?;
    let mut response = String::new();
    std::io::stdin().lock().read_line(&mut response)?;
    if response.trim() != confirmation {
        println!("Deletion not confirmed. Exiting.");
        return Ok(());
    }

    for board in &boards {
        println!("{}", board);
        let prompt = format!("Delete board: {}?", board.text_id()?);
        if input_one_of(&prompt, &["yes", "no"], "yes")? != "yes" {
            continue;
        }
        board.delete().await?;
    }
    Ok(())
}
