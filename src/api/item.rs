/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_many, related_one};
use crate::api::parsers::{from_empty_str_to_none, from_null_to_empty_vec};
use crate::api::{
    Collection, Create, Datum, Delete, Get, HasImage, Iri, List, Loan, Metadata, Tag, Update,
    Visibility,
};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Item API.
///
/// An item lives in exactly one [`Collection`] and links to its [`Tag`]s and
/// related items by IRI.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(flatten)]
    pub meta: Metadata,

    pub name: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    pub collection: Iri,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image_small_thumbnail: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image_large_thumbnail: Option<String>,

    #[serde(default, deserialize_with = "from_null_to_empty_vec")]
    pub tags: Vec<Iri>,

    #[serde(default, deserialize_with = "from_null_to_empty_vec")]
    pub related_items: Vec<Iri>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub parent_visibility: Option<Visibility>,

    #[serde(default)]
    pub final_visibility: Option<Visibility>,

    #[serde(default)]
    pub seen_counter: Option<u64>,
}

fn default_quantity() -> u32 {
    1
}

impl_resource!(Item, "items");

impl Get for Item {}
impl List for Item {}
impl Delete for Item {}
impl HasImage for Item {}

impl Create for Item {
    type Payload = ItemPayload;
}

impl Update for Item {
    type Payload = ItemPayload;
}

impl Item {
    related_many!(related_items, "related_items", Item);

    related_many!(
        /// Loans of item `id`, past and current
        loans,
        "loans",
        Loan
    );

    related_many!(tags, "tags", Tag);

    related_many!(data, "data", Datum);

    related_one!(
        /// The collection item `id` belongs to
        collection,
        "collection",
        Collection
    );
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Iri>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_items: Option<Vec<Iri>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_image: Option<bool>,
}

impl ItemPayload {
    pub fn new(name: &str, collection: Iri) -> Self {
        Self {
            name: Some(name.to_string()),
            collection: Some(collection),
            ..Default::default()
        }
    }
}
