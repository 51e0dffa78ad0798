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
    Create, Delete, Get, HasImage, Iri, List, Metadata, Update, Visibility, Wish,
};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Wishlist API.
///
/// Wishlists nest through `parent` like collections do and hold [`Wish`]es.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    #[serde(flatten)]
    pub meta: Metadata,

    pub name: String,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub parent: Option<Iri>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub parent_visibility: Option<Visibility>,

    #[serde(default)]
    pub final_visibility: Option<Visibility>,

    #[serde(default)]
    pub seen_counter: Option<u64>,
}

impl_resource!(Wishlist, "wishlists");

impl Get for Wishlist {}
impl List for Wishlist {}
impl Delete for Wishlist {}
impl HasImage for Wishlist {}

impl Create for Wishlist {
    type Payload = WishlistPayload;
}

impl Update for Wishlist {
    type Payload = WishlistPayload;
}

impl Wishlist {
    related_many!(wishes, "wishes", Wish);

    related_many!(children, "children", Wishlist);

    related_one!(parent, "parent", Wishlist);
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_image: Option<bool>,
}

impl WishlistPayload {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}
