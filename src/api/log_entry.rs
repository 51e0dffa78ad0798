/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::impl_resource;
use crate::api::{Get, List, LogType, Metadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry of the server's activity history. Read only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    #[serde(flatten)]
    pub meta: Metadata,

    #[serde(rename = "type")]
    pub log_type: LogType,

    pub logged_at: DateTime<Utc>,

    pub object_id: String,

    pub object_label: String,

    pub object_class: String,

    #[serde(default)]
    pub object_deleted: bool,
}

impl_resource!(Log, "logs");

impl Get for Log {}
impl List for Log {}
