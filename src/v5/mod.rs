/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod access_token;
pub mod advertisers;
pub mod analytics;
pub mod analytics_attributes;
pub mod api;
pub mod async_report;
pub mod backoff;
pub mod board;
pub mod client;
pub mod config;
pub mod errors;
pub mod generic_requests;
mod macros;
pub mod media;
mod parsers;
pub mod pin;
pub mod properties;
pub mod scope;
pub mod terms;
pub mod user;
#[cfg(feature = "loopback")]
pub mod user_auth;

pub use access_token::*;
pub use advertisers::*;
pub use analytics::*;
pub use analytics_attributes::*;
pub use api::*;
pub use async_report::*;
pub use backoff::*;
pub use board::*;
pub use client::*;
pub use config::*;
pub use errors::*;
pub use pin::*;
pub use properties::*;
pub use scope::*;
pub use terms::*;
pub use user::*;
