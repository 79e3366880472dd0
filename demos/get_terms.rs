/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Shows related or suggested terms for ads targeting.

mod common;

use anyhow::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};
use common::CommonArgs;
use pinterest::v5::{Scope, Terms};

#[derive(Parser, Debug)]
#[command(about = "Get Related or Suggested Terms")]
struct Cli {
    /// Comma separated list of terms
    terms: String,

    /// Get related terms
    #[arg(short = 'r', long)]
    related: bool,

    /// Get suggested terms
    #[arg(short = 's', long)]
    suggested: bool,

    /// Limit for suggested terms
    #[arg(short = 'n', long)]
    limit: Option<u32>,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    fn validate(&self) -> Option<&'static str> {
        if !self.related && !self.suggested {
            return Some("Please specify --related or --suggested");
        }
        if self.related && self.suggested {
            return Some("Please specify only one of --related or --suggested");
        }
        if self.related && self.limit.is_some() {
            return Some("Please do not specify --limit with --related");
        }
        if self.suggested && self.terms.contains(',') {
            return Some("Please specify only one term with --suggested");
        }
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    if let Some(error) = args.validate() {
        Cli::command().error(ErrorKind::ArgumentConflict, error).exit();
    }
    let config = args.common.init()?;
    let client = args.common.client(&config, &[Scope::ReadAds]).await?;

    let terms = Terms::new(client);
    if args.related {
        println!("{}", terms.related(&args.terms).await?);
    } else {
        println!("{}", terms.suggested(&args.terms, args.limit).await?);
    }
    Ok(())
}
