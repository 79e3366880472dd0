/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::Privacy;
use serde::Deserialize;
use std::str::FromStr;

// Parses privacy type
pub fn from_privacy<'de, D>(deserializer: D) -> Result<Option<Privacy>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.map(|s| Privacy::from_str(&s).unwrap_or(Privacy::Unknown)))
}

// Parses strings that may be null or "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

pub fn is_none_or_empty_str(s: &Option<String>) -> bool {
    s.as_ref().is_none_or(|s| s.is_empty())
}
