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
    Create, Delete, Get, HasImage, Iri, List, Metadata, Update, Visibility, Wishlist,
};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Wish API.
///
/// `price` is kept as the decimal string the server stores.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    #[serde(flatten)]
    pub meta: Metadata,

    pub name: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub price: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub comment: Option<String>,

    pub wishlist: Iri,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image_small_thumbnail: Option<String>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub parent_visibility: Option<Visibility>,

    #[serde(default)]
    pub final_visibility: Option<Visibility>,
}

impl_resource!(Wish, "wishes");

impl Get for Wish {}
impl List for Wish {}
impl Delete for Wish {}
impl HasImage for Wish {}

impl Create for Wish {
    type Payload = WishPayload;
}

impl Update for Wish {
    type Payload = WishPayload;
}

impl Wish {
    related_one!(wishlist, "wishlist", Wishlist);
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_image: Option<bool>,
}

impl WishPayload {
    pub fn new(name: &str, wishlist: Iri) -> Self {
        Self {
            name: Some(name.to_string()),
            wishlist: Some(wishlist),
            ..Default::default()
        }
    }
}
