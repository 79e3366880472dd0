/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Prints a summary of every board in the user's profile, one page at a time.

mod common;

use anyhow::Result;
use clap::Parser;
use common::{CommonArgs, positive_integer, print_multiple};
use pinterest::v5::{Scope, UserAccount};

#[derive(Parser, Debug)]
#[command(about = "Get A User's Boards")]
struct Cli {
    /// Boards per page
    #[arg(long = "page-size", default_value_t = 25, value_parser = positive_integer)]
    page_size: u32,

    /// Include empty boards
    #[arg(long)]
    include_empty: bool,

    /// Include archived boards
    #[arg(long)]
    include_archived: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.common.init()?;
    let client = args
        .common
        .client(&config, &[Scope::ReadUsers, Scope::ReadBoards])
        .await?;

    let user = UserAccount::get(client).await?;

    let page_size = args.page_size.to_string();
    let mut params = vec![("page_size", page_size.as_str())];
    if args.include_empty {
        params.push(("include_empty", "true"));
    }
    if args.include_archived {
        params.push(("include_archived", "true"));
    }

    let boards = user.boards(Some(params.as_slice()))?;
    print_multiple(args.page_size, "board", boards).await
}
