/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// OAuth scopes understood by Pinterest API v5.
///
/// Parsing accepts either the scope value (`boards:read`) or the constant style name
/// (`READ_BOARDS`), ignoring case.
///
/// See [Pinterest Scopes](https://developers.pinterest.com/docs/getting-started/scopes/)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Scope {
    #[strum(to_string = "ads:read", serialize = "read_ads", serialize = "read_advertisers")]
    ReadAds,
    #[strum(to_string = "boards:read", serialize = "read_boards")]
    ReadBoards,
    #[strum(to_string = "boards:write", serialize = "write_boards")]
    WriteBoards,
    #[strum(to_string = "pins:read", serialize = "read_pins")]
    ReadPins,
    #[strum(to_string = "pins:write", serialize = "write_pins")]
    WritePins,
    #[strum(to_string = "user_accounts:read", serialize = "read_users")]
    ReadUsers,
    #[strum(to_string = "boards:read_secret", serialize = "read_secret_boards")]
    ReadSecretBoards,
    #[strum(to_string = "boards:write_secret", serialize = "write_secret_boards")]
    WriteSecretBoards,
    #[strum(to_string = "pins:read_secret", serialize = "read_secret_pins")]
    ReadSecretPins,
    #[strum(to_string = "pins:write_secret", serialize = "write_secret_pins")]
    WriteSecretPins,
}

impl Scope {
    /// Advertising data is read with the same scope as ads
    pub const READ_ADVERTISERS: Scope = Scope::ReadAds;

    /// Scopes requested when the caller does not ask for any
    pub const DEFAULT: [Scope; 3] = [Scope::ReadUsers, Scope::ReadPins, Scope::ReadBoards];

    /// Looks up a scope by name or value
    pub fn lookup(key: &str) -> Result<Scope, PinterestError> {
        Scope::from_str(key.trim()).map_err(|_| {
            PinterestError::InvalidArgument(format!("Invalid scope: {}\n{}", key, Self::help()))
        })
    }

    /// Parses a comma separated list of scopes
    pub fn parse_list(keys: &str) -> Result<Vec<Scope>, PinterestError> {
        keys.split(',')
            .filter(|k| !k.trim().is_empty())
            .map(Self::lookup)
            .collect()
    }

    /// Joins scopes into the comma separated form the OAuth endpoint expects
    pub fn join(scopes: &[Scope]) -> String {
        scopes
            .iter()
            .map(|s| -> &'static str { s.into() })
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scope::ReadAds => "Read access to advertising data",
            Scope::ReadBoards => "Read access to boards",
            Scope::WriteBoards => "Write access to create, update, or delete boards",
            Scope::ReadPins => "Read access to Pins",
            Scope::WritePins => "Write access to create, update, or delete Pins",
            Scope::ReadUsers => "Read access to user accounts",
            Scope::ReadSecretBoards => "Read access to secret boards",
            Scope::WriteSecretBoards => "Write access to create, update, or delete secret boards",
            Scope::ReadSecretPins => "Read access to secret Pins",
            Scope::WriteSecretPins => "Write access to create, update, or delete secret Pins",
        }
    }

    /// Lists the valid scopes with a short description of each
    pub fn help() -> String {
        let mut help = String::from("Valid OAuth 2.0 scopes for Pinterest API version v5:\n");
        for scope in Scope::iter() {
            help.push_str(&format!("  {:<20}{}\n", scope.to_string(), scope.description()));
        }
        help.push_str(
            "For more information, see:\n  https://developers.pinterest.com/docs/getting-started/scopes/",
        );
        help
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_or_value() {
        assert_eq!(Scope::lookup("READ_BOARDS").unwrap(), Scope::ReadBoards);
        assert_eq!(Scope::lookup("boards:read").unwrap(), Scope::ReadBoards);
        assert_eq!(Scope::lookup("Read_Advertisers").unwrap(), Scope::ReadAds);
        assert!(matches!(
            Scope::lookup("boards:destroy"),
            Err(PinterestError::InvalidArgument(msg)) if msg.contains("user_accounts:read")
        ));
    }

    #[test]
    fn join_uses_scope_values() {
        assert_eq!(
            Scope::join(&Scope::DEFAULT),
            "user_accounts:read,pins:read,boards:read"
        );
        assert_eq!(
            Scope::parse_list("read_pins, boards:write").unwrap(),
            vec![Scope::ReadPins, Scope::WriteBoards]
        );
    }
}
