/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_many};
use crate::api::{Create, Delete, Get, List, Metadata, Tag, Update};
use serde::{Deserialize, Serialize};

/// Groups [`Tag`]s
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagCategory {
    #[serde(flatten)]
    pub meta: Metadata,

    pub label: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub color: Option<String>,
}

impl_resource!(TagCategory, "tag_categories");

impl Get for TagCategory {}
impl List for TagCategory {}
impl Delete for TagCategory {}

impl Create for TagCategory {
    type Payload = TagCategoryPayload;
}

impl Update for TagCategory {
    type Payload = TagCategoryPayload;
}

impl TagCategory {
    related_many!(tags, "tags", Tag);
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
pub struct TagCategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
