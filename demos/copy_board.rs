/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Creates a test copy of one board or of all of the boards in an account. Each copy
//! includes the pins on the board, its sections and the pins in each section.
//!
//! 1. Copy a board within one account. Board names are unique per account so a new
//!    name is needed: `copy_board -b <board-id> -n 'test board 001'`
//! 2. Copy a board to another account:
//!    `copy_board -b <board-id> -s source_token -t target_token`
//! 3. Copy every board to another account. This creates a lot of data, so check it first
//!    with `--dry-run`: `copy_board --dry-run --all -s source_token -t target_token`

mod common;

use anyhow::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};
use common::{CommonArgs, token_client};
use futures::TryStreamExt;
use pinterest::v5::{Board, Client, CreateBoardProps, Pin, PinterestError, Scope, UserAccount};

#[derive(Parser, Debug)]
#[command(about = "Copy one Board or all Boards")]
struct Cli {
    /// Source board identifier
    #[arg(short = 'b', long = "board-id")]
    board_id: Option<String>,

    /// Target board name
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Source access token name
    #[arg(short = 's', long = "source-access-token")]
    source_access_token: Option<String>,

    /// Target access token name
    #[arg(short = 't', long = "target-access-token")]
    target_access_token: Option<String>,

    /// Copy all boards from source to target
    #[arg(long = "all")]
    all_boards: bool,

    /// Print changes but do not execute them
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    fn source_token(&self) -> Option<&str> {
        self.source_access_token
            .as_deref()
            .or(self.common.access_token.as_deref())
    }

    fn validate(&self) -> Option<&'static str> {
        let mut error = None;
        if self.target_access_token.is_some() {
            if self.source_token().is_none() {
                error = Some("source access token is required when using a target access token");
            }
        } else {
            if self.all_boards {
                error = Some("all boards option requires a target access token");
            }
            if self.name.is_none() {
                error =
                    Some("target board name is required when not using a target access token");
            }
        }
        if self.all_boards && self.name.is_some() {
            error = Some("the name and all options are mutually exclusive");
        }
        if self.all_boards {
            if self.board_id.is_some() {
                error = Some("the board-id and all options are mutually exclusive");
            }
        } else if self.board_id.is_none() {
            error = Some("board-id is a required argument when not copying all boards");
        }
        error
    }
}

async fn copy_pin(
    pin: &Pin,
    target: &Client,
    board_id: &str,
    section_id: Option<&str>,
) -> Result<()> {
    if !pin.is_pin() {
        println!("skipping pin because type is not 'pin'");
        println!("{}", pin);
        return Ok(());
    }
    println!("source pin:");
    println!("{}", pin);
    match pin.copy_to(target.clone(), board_id, section_id, None).await {
        Ok(new_pin) => {
            println!("target pin:");
            println!("{}", new_pin);
        }
        Err(PinterestError::Spam(_)) => println!("skipping pin because of spam exception"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

async fn copy_board(args: &Cli, source_board: &Board, target: &Client) -> Result<()> {
    println!("source board:");
    println!("{}", source_board);

    let mut props = CreateBoardProps::from_board(source_board);
    if let Some(name) = &args.name {
        println!("setting target board name to \"{}\"", name);
        props.name = name.clone();
    }

    let target_board = if args.dry_run {
        println!("dry-run: skipping attempt to create board:");
        println!("{:#?}", props);
        None
    } else {
        let board = Board::create(target.clone(), &props).await?;
        println!("target board:");
        println!("{}", board);
        Some(board)
    };

    let pins = source_board.pins(None)?;
    futures::pin_mut!(pins);
    while let Some(pin) = pins.try_next().await? {
        match &target_board {
            Some(board) => copy_pin(&pin, target, &board.id, None).await?,
            None => {
                println!("dry-run: skipping attempt to create board pin:");
                println!("{}", pin);
            }
        }
    }

    let sections = source_board.sections(None)?;
    futures::pin_mut!(sections);
    let mut idx = 0;
    while let Some(section) = sections.try_next().await? {
        let target_section = match &target_board {
            Some(board) => {
                println!("source section #{}:", idx);
                println!("{}", section);
                let target_section = board.create_section(&section.name).await?;
                println!("target section #{}:", idx);
                println!("{}", target_section);
                Some(target_section)
            }
            None => {
                println!("dry-run: skipping attempt to create board section:");
                println!("{}", section);
                None
            }
        };

        let pins = source_board.section_pins(&section.id, None)?;
        futures::pin_mut!(pins);
        while let Some(pin) = pins.try_next().await? {
            match (&target_board, &target_section) {
                (Some(board), Some(target_section)) => {
                    copy_pin(&pin, target, &board.id, Some(&target_section.id)).await?
                }
                _ => {
                    println!("dry-run: skipping attempt to create board section pin:");
                    println!("{}", pin);
                }
            }
        }
        idx += 1;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    if let Some(error) = args.validate() {
        Cli::command().error(ErrorKind::ArgumentConflict, error).exit();
    }
    let config = args.common.init()?;

    let source_scopes = [Scope::ReadPins, Scope::ReadBoards, Scope::ReadUsers];
    let target_scopes = [Scope::WritePins, Scope::WriteBoards];
    let (source, target) = match &args.target_access_token {
        Some(target_name) => {
            let target = token_client(&config, Some(target_name), &target_scopes).await?;
            let source = token_client(&config, args.source_token(), &source_scopes).await?;
            (source, target)
        }
        None => {
            // one token does both jobs so it needs all of the scopes
            let scopes: Vec<Scope> = source_scopes.into_iter().chain(target_scopes).collect();
            let client = token_client(&config, args.source_token(), &scopes).await?;
            (client.clone(), client)
        }
    };

    let boards: Vec<Board> = match &args.board_id {
        Some(board_id) => vec![Board::from_id(source, board_id).await?],
        None => {
            let user = UserAccount::get(source).await?;
            user.boards(None)?.try_collect().await?
        }
    };

    for board in &boards {
        copy_board(&args, board, &target).await?;
    }
    Ok(())
}
