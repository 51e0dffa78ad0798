/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Who can see a resource
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Private,
}

/// Kind of value a datum carries. Template fields use the same tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DatumType {
    Text,
    Textarea,
    Country,
    Date,
    Rating,
    Number,
    Price,
    Link,
    List,
    ChoiceList,
    Checkbox,
    Image,
    File,
    Sign,
    Video,
    BlankLine,
    Section,
}

impl DatumType {
    /// Kinds whose payload is uploaded as media rather than sent as a value
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Image | Self::File | Self::Sign | Self::Video)
    }

    /// Kinds that only shape the layout and carry no value
    pub fn is_decorative(&self) -> bool {
        matches!(self, Self::BlankLine | Self::Section)
    }
}

pub type FieldType = DatumType;

/// Date formats offered in user settings, PHP `date()` notation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr,
)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "d/m/Y")]
    #[strum(serialize = "d/m/Y")]
    DaySlashMonthSlashYear,
    #[serde(rename = "m/d/Y")]
    #[strum(serialize = "m/d/Y")]
    MonthSlashDaySlashYear,
    #[serde(rename = "Y/m/d")]
    #[strum(serialize = "Y/m/d")]
    YearSlashMonthSlashDay,
    #[serde(rename = "d-m-Y")]
    #[strum(serialize = "d-m-Y")]
    DayDashMonthDashYear,
    #[serde(rename = "m-d-Y")]
    #[strum(serialize = "m-d-Y")]
    MonthDashDayDashYear,
    #[serde(rename = "Y-m-d")]
    #[strum(serialize = "Y-m-d")]
    YearDashMonthDashDay,
}

impl DateFormat {
    /// Equivalent `chrono` format string
    pub fn chrono_format(&self) -> &'static str {
        match self {
            Self::DaySlashMonthSlashYear => "%d/%m/%Y",
            Self::MonthSlashDaySlashYear => "%m/%d/%Y",
            Self::YearSlashMonthSlashDay => "%Y/%m/%d",
            Self::DayDashMonthDashYear => "%d-%m-%Y",
            Self::MonthDashDayDashYear => "%m-%d-%Y",
            Self::YearDashMonthDashDay => "%Y-%m-%d",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogType {
    Create,
    Delete,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Browser,
    Light,
    Dark,
}

/// How a collection lays out its items
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}
