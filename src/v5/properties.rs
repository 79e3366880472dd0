/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Privacy {
    Unknown,
    Public,
    Protected,
    Secret,
}

/// How metrics are broken down over the date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Granularity {
    Total,
    Day,
    Hour,
    Week,
    Month,
}

/// Entity level of an asynchronous delivery metrics report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Advertiser,
    AdGroup,
    Campaign,
    Item,
    Keyword,
    PinPromotion,
    PinPromotionTargeting,
    ProductGroup,
    ProductGroupTargeting,
    ProductItem,
    SearchQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityField {
    AdGroupId,
    AdGroupName,
    AdGroupStatus,
    CampaignId,
    CampaignManagedStatus,
    CampaignName,
    CampaignStatus,
    PinPromotionId,
    PinPromotionName,
    PinPromotionStatus,
    ProductGroupId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSource {
    Offline,
    Realtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversionReportTime {
    TimeOfAdAction,
    TimeOfConversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum FromClaimedContent {
    Other,
    Claimed,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum PinFormat {
    All,
    Product,
    Regular,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum AppTypes {
    All,
    Mobile,
    Tablet,
    Web,
}

/// Ways user analytics can be split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserSplitField {
    NoSplit,
    AppType,
    OwnedContent,
    PinFormat,
}

/// Ways pin analytics can be split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PinSplitField {
    NoSplit,
    AppType,
}

/// Conversion attribution window in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum WindowDays {
    Zero = 0,
    One = 1,
    Seven = 7,
    Fourteen = 14,
    Thirty = 30,
    Sixty = 60,
}

/// Version of the Pinterest Tag used for conversion metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum TagVersion {
    Two = 2,
    Three = 3,
}

impl WindowDays {
    pub fn from_days(name: &str, days: u8) -> Result<Self, PinterestError> {
        WindowDays::try_from(days).map_err(|_| {
            PinterestError::InvalidAttribute(format!(
                "{}: {} is not one of [0, 1, 7, 14, 30, 60]",
                name, days
            ))
        })
    }
}

impl TagVersion {
    pub fn from_version(version: u8) -> Result<Self, PinterestError> {
        TagVersion::try_from(version).map_err(|_| {
            PinterestError::InvalidAttribute(format!(
                "tag_version: {} is not one of [2, 3]",
                version
            ))
        })
    }
}

/// Parses an API defined value for the named attribute.
///
/// The error lists the accepted values, sorted.
pub fn parse_enumerated<E>(name: &str, value: &str) -> Result<E, PinterestError>
where
    E: FromStr + IntoEnumIterator + Into<&'static str>,
{
    E::from_str(value).map_err(|_| {
        let mut values: Vec<&'static str> = E::iter().map(Into::into).collect();
        values.sort_unstable();
        PinterestError::InvalidAttribute(format!(
            "{}: {} is not one of {:?}",
            name, value, values
        ))
    })
}
