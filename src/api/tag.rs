/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_many, related_one};
use crate::api::parsers::from_empty_str_to_none;
use crate::api::{
    Create, Delete, Get, HasImage, Iri, Item, List, Metadata, TagCategory, Update, Visibility,
};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Tag API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(flatten)]
    pub meta: Metadata,

    pub label: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image_small_thumbnail: Option<String>,

    #[serde(default)]
    pub category: Option<Iri>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub seen_counter: Option<u64>,
}

impl_resource!(Tag, "tags");

impl Get for Tag {}
impl List for Tag {}
impl Delete for Tag {}
impl HasImage for Tag {}

impl Create for Tag {
    type Payload = TagPayload;
}

impl Update for Tag {
    type Payload = TagPayload;
}

impl Tag {
    related_many!(
        /// Items tagged with tag `id`
        items,
        "items",
        Item
    );

    related_one!(category, "category", TagCategory);
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_image: Option<bool>,
}

impl TagPayload {
    pub fn new(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Default::default()
        }
    }
}
