/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Pinterest
//!
//! This Pinterest library was created for working with the Pinterest REST API v5.
//!
//! For further details on the Rest API refer to the [Pinterest API Docs](https://developers.pinterest.com/docs/api/v5/)
//!
//! ## Features
//!
//! - OAuth access tokens
//!     - Read from the environment or from a token file
//!     - Browser based authorization with a redirect to a local listener (`loopback` feature)
//!     - Refreshing, including continuous refresh tokens
//! - User account information
//!     - List boards and pins
//! - Boards
//!     - Create, delete and list pins
//!     - Sections
//! - Pins
//!     - Save to a board
//!     - Copy to a board, optionally as a video pin with uploaded media
//! - Ad accounts, campaigns, ad groups and ads
//! - Synchronous analytics for users, pins and ads
//! - Asynchronous delivery metrics reports
//! - Related and suggested terms
//! - Lower level interface for handling the raw communication
//!
//! *List endpoints are paged with bookmarks. The library does the paging and hands back a
//! stream of items.*
//!
//! ## Configuration
//!
//! [`v5::ApiConfig::from_env`] reads the application id and secret along with the optional
//! settings from the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PINTEREST_APP_ID` | required |
//! | `PINTEREST_APP_SECRET` | required |
//! | `PINTEREST_API_URI` | `https://api.pinterest.com` |
//! | `PINTEREST_OAUTH_URI` | `https://www.pinterest.com` |
//! | `PINTEREST_OAUTH_TOKEN_DIR` | `.` |
//! | `REDIRECT_LANDING_URI` | `https://developers.pinterest.com/apps/<app id>` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use futures::{StreamExt, pin_mut};
//! use pinterest::v5::{AccessToken, ApiConfig, Client, PinterestError, Scope, UserAccount};
//!
//! async fn list_boards() -> Result<(), PinterestError> {
//!     let config = ApiConfig::from_env()?;
//!     let mut token = AccessToken::new(&config, None);
//!     token.fetch(Some(&[Scope::ReadUsers, Scope::ReadBoards]), true).await?;
//!
//!     let client = Client::new(&config, &token)?;
//!     let user = UserAccount::get(client).await?;
//!     let boards = user.boards(None)?;
//!     pin_mut!(boards);
//!     while let Some(board) = boards.next().await {
//!         println!("{}", board?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod v5;
