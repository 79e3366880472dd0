/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
#![allow(dead_code)]

// Pieces shared by the demo programs

use anyhow::{Result, bail};
use clap::Args;
use futures::{Stream, StreamExt, TryStreamExt, pin_mut};
use log::LevelFilter;
use pinterest::v5::{
    AccessToken, AdsEntity, Advertisers, ApiConfig, Client, PinterestError, Scope,
};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Arguments common to all of the demos
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Access token name
    #[arg(short = 'a', long = "access-token")]
    pub access_token: Option<String>,

    /// Level of logging verbosity: 0 warnings, 1 responses, 2 requests, 3 everything
    #[arg(short = 'l', long = "log-level", default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(0..=3))]
    pub log_level: u8,
}

impl CommonArgs {
    /// Loads `.env`, starts logging and reads the configuration from the environment
    pub fn init(&self) -> Result<ApiConfig> {
        dotenvy::dotenv().ok();
        init_logging(self.log_level);
        Ok(ApiConfig::from_env()?)
    }

    /// Fetches the access token and creates a client that uses it
    pub async fn client(&self, config: &ApiConfig, scopes: &[Scope]) -> Result<Client> {
        token_client(config, self.access_token.as_deref(), scopes).await
    }
}

/// Fetches the named access token (or the default one) and creates a client that uses it
pub async fn token_client(
    config: &ApiConfig,
    name: Option<&str>,
    scopes: &[Scope],
) -> Result<Client> {
    let mut access_token = AccessToken::new(config, name);
    access_token.fetch(Some(scopes), true).await?;
    Ok(Client::new(config, &access_token)?)
}

pub fn init_logging(log_level: u8) {
    let level = match log_level {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("pinterest", level)
        .parse_default_env()
        .init();
}

/// Clap parser for arguments that must be greater than zero
pub fn positive_integer(value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive integer", value)),
    }
}

/// Prompts for a number between minimum and maximum. Enter alone picks the default.
pub fn input_number(
    prompt: &str,
    minimum: usize,
    maximum: usize,
    default: Option<usize>,
) -> Result<usize> {
    let default = default.unwrap_or(minimum);
    if minimum == maximum {
        return Ok(minimum);
    }
    if minimum > maximum {
        bail!("minimum {} > maximum {}", minimum, maximum);
    }
    if !prompt.is_empty() {
        println!("{}", prompt);
    }

    let stdin = std::io::stdin();
    loop {
        print!("[{}] ", default);
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("no input");
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse::<usize>() {
            Ok(n) if (minimum..=maximum).contains(&n) => return Ok(n),
            Ok(_) => println!("{} is not between {} and {}", line, minimum, maximum),
            Err(_) => println!("{} is not a number", line),
        }
    }
}

/// Prompts for a path to write to, asking before an existing file is replaced
pub fn input_path_for_write(prompt: &str, default: &str) -> Result<Option<String>> {
    let stdin = std::io::stdin();
    loop {
        print!("{} [{}] ", prompt, default);
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let path = match line.trim() {
            "" => default.to_string(),
            other => other.to_string(),
        };
        if !std::path::Path::new(&path).exists() {
            return Ok(Some(path));
        }
        print!("{} exists. Overwrite? [y/N] ", path);
        std::io::stdout().flush()?;
        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;
        if answer.trim().eq_ignore_ascii_case("y") {
            return Ok(Some(path));
        }
    }
}

/// Prompts until one of the choices is entered. Enter alone picks the default.
pub fn input_one_of(prompt: &str, choices: &[&str], default: &str) -> Result<String> {
    let stdin = std::io::stdin();
    loop {
        print!("{} [{}] ", prompt, default);
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(default.to_string());
        }
        match line.trim() {
            "" => return Ok(default.to_string()),
            answer if choices.contains(&answer) => return Ok(answer.to_string()),
            answer => println!("{} is not one of {}", answer, choices.join(", ")),
        }
    }
}

/// Prints the items of a stream, asking whether to go on after every `page_size` of them
pub async fn print_multiple<T: Display>(
    page_size: u32,
    object_name: &str,
    items: impl Stream<Item = Result<T, PinterestError>>,
) -> Result<()> {
    pin_mut!(items);
    let mut page_index = 1;
    let mut index = 1;
    while let Some(item) = items.next().await {
        let item = item?;
        // checked after the next item arrives so there is always more to print
        if page_index > page_size {
            let prompt = format!("Continue printing {} list?", object_name);
            if input_one_of(&prompt, &["yes", "no"], "yes")? != "yes" {
                break;
            }
            page_index = 1;
        }
        print!("[{}] ", index);
        println!("{}", item);
        index += 1;
        page_index += 1;
    }
    Ok(())
}

/// Levels of the advertising hierarchy, from the top down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdsLevel {
    AdAccount,
    Campaign,
    AdGroup,
    Ad,
}

impl AdsLevel {
    pub const ALL: [AdsLevel; 4] = [
        AdsLevel::AdAccount,
        AdsLevel::Campaign,
        AdsLevel::AdGroup,
        AdsLevel::Ad,
    ];

    pub fn kind(self) -> &'static str {
        match self {
            AdsLevel::AdAccount => "Ad Account",
            AdsLevel::Campaign => "Campaign",
            AdsLevel::AdGroup => "Ad Group",
            AdsLevel::Ad => "Ad",
        }
    }

    pub fn parent(self) -> &'static str {
        match self {
            AdsLevel::AdAccount => "User",
            AdsLevel::Campaign => "Ad Account",
            AdsLevel::AdGroup => "Campaign",
            AdsLevel::Ad => "Ad Group",
        }
    }

    /// Lists the entities at this level. `ids` holds the identifiers of the parents,
    /// starting with the ad account.
    pub async fn list(self, advertisers: &Advertisers, ids: &[String]) -> Result<Vec<AdsEntity>> {
        let entities: Vec<AdsEntity> = match (self, ids) {
            (AdsLevel::AdAccount, []) => advertisers.ad_accounts(None).try_collect().await?,
            (AdsLevel::Campaign, [account]) => {
                advertisers.campaigns(account, None).try_collect().await?
            }
            (AdsLevel::AdGroup, [account, campaign]) => {
                advertisers
                    .ad_groups(account, campaign, None)
                    .try_collect()
                    .await?
            }
            (AdsLevel::Ad, [account, campaign, group]) => {
                advertisers
                    .ads(account, campaign, group, None)
                    .try_collect()
                    .await?
            }
            _ => bail!("wrong number of parent identifiers for {}", self.kind()),
        };
        Ok(entities)
    }

    /// Prints the entities and asks which one to use
    pub fn select(self, entities: &[AdsEntity]) -> Result<usize> {
        println!("{}", AdsEntity::enumeration(entities, self.kind()));
        let prompt = format!(
            "Please select the {} number between 1 and {}:",
            self.kind(),
            entities.len()
        );
        Ok(input_number(&prompt, 1, entities.len(), None)? - 1)
    }
}
