/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_one};
use crate::api::parsers::from_empty_str_to_none;
use crate::api::{
    Album, Create, Delete, Get, HasImage, Iri, List, Metadata, Update, Visibility,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Photo API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(flatten)]
    pub meta: Metadata,

    pub title: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(default)]
    pub place: Option<String>,

    pub album: Iri,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image_small_thumbnail: Option<String>,

    #[serde(default)]
    pub taken_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub parent_visibility: Option<Visibility>,

    #[serde(default)]
    pub final_visibility: Option<Visibility>,
}

impl_resource!(Photo, "photos");

impl Get for Photo {}
impl List for Photo {}
impl Delete for Photo {}
impl HasImage for Photo {}

impl Create for Photo {
    type Payload = PhotoPayload;
}

impl Update for Photo {
    type Payload = PhotoPayload;
}

impl Photo {
    related_one!(album, "album", Album);
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_image: Option<bool>,
}

impl PhotoPayload {
    pub fn new(title: &str, album: Iri) -> Self {
        Self {
            title: Some(title.to_string()),
            album: Some(album),
            ..Default::default()
        }
    }
}
