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
    Create, Datum, Delete, DisplayMode, Get, HasImage, Iri, Item, List, Metadata, Template, Update,
    Visibility,
};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Collection API.
///
/// Collections nest through `parent` and hold [`Item`]s plus their own
/// [`Datum`] entries. New items can be pre-filled from
/// `items_default_template`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(flatten)]
    pub meta: Metadata,

    pub title: String,

    #[serde(default)]
    pub children_title: Option<String>,

    #[serde(default)]
    pub items_title: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub parent: Option<Iri>,

    #[serde(default)]
    pub items_default_template: Option<Iri>,

    #[serde(default)]
    pub items_display_mode: Option<DisplayMode>,

    #[serde(default)]
    pub children_display_mode: Option<DisplayMode>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub parent_visibility: Option<Visibility>,

    #[serde(default)]
    pub final_visibility: Option<Visibility>,

    #[serde(default)]
    pub seen_counter: Option<u64>,
}

impl_resource!(Collection, "collections");

impl Get for Collection {}
impl List for Collection {}
impl Delete for Collection {}
impl HasImage for Collection {}

impl Create for Collection {
    type Payload = CollectionPayload;
}

impl Update for Collection {
    type Payload = CollectionPayload;
}

impl Collection {
    related_many!(children, "children", Collection);

    related_one!(parent, "parent", Collection);

    related_many!(
        /// Items directly inside collection `id`
        items,
        "items",
        Item
    );

    related_many!(
        /// Data attached to the collection itself, not to its items
        data,
        "data",
        Datum
    );

    related_one!(
        /// Template new items of collection `id` start from
        items_default_template,
        "items_default_template",
        Template
    );
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_default_template: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_display_mode: Option<DisplayMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_display_mode: Option<DisplayMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_image: Option<bool>,
}

impl CollectionPayload {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}
