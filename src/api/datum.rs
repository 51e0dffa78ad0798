/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_one, upload_media};
use crate::api::parsers::from_empty_str_to_none;
use crate::api::{
    Collection, Create, DatumType, Delete, Get, HasImage, Iri, Item, List, Metadata, Update,
    Visibility,
};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Datum API.
///
/// A datum is one labelled value on either an [`Item`] or a [`Collection`],
/// never both. How `value` is read depends on `datum_type`: `price` values are
/// decimals in `currency`, `choice_list` values draw from `choice_list`, and
/// the media kinds carry their payload in `image`, `file` or `video` instead.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Datum {
    #[serde(flatten)]
    pub meta: Metadata,

    #[serde(rename = "type")]
    pub datum_type: DatumType,

    pub label: String,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub position: Option<i32>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub item: Option<Iri>,

    #[serde(default)]
    pub collection: Option<Iri>,

    #[serde(default)]
    pub choice_list: Option<Iri>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image_small_thumbnail: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub image_large_thumbnail: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub file: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub video: Option<String>,

    #[serde(default)]
    pub original_filename: Option<String>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub parent_visibility: Option<Visibility>,

    #[serde(default)]
    pub final_visibility: Option<Visibility>,
}

impl_resource!(Datum, "data");

impl Get for Datum {}
impl List for Datum {}
impl Delete for Datum {}
impl HasImage for Datum {}

impl Create for Datum {
    type Payload = DatumPayload;
}

impl Update for Datum {
    type Payload = DatumPayload;
}

impl Datum {
    upload_media!(
        /// Uploads the attached file of datum `id`
        upload_file,
        upload_file_from_file,
        "file"
    );

    upload_media!(
        /// Uploads the video of datum `id`
        upload_video,
        upload_video_from_file,
        "video"
    );

    related_one!(
        /// The item datum `id` is attached to. Fails with `NotFound` for
        /// collection data.
        item,
        "item",
        Item
    );

    related_one!(
        /// The collection datum `id` is attached to. Fails with `NotFound` for
        /// item data.
        collection,
        "collection",
        Collection
    );

    /// The `value` of a price datum as a decimal
    pub fn price(&self) -> Option<f64> {
        match self.datum_type {
            DatumType::Price => self.value.as_deref().and_then(|v| v.trim().parse().ok()),
            _ => None,
        }
    }
}

/// Properties that can be used in the creation or update of a Datum.
///
/// Set either `item` or `collection`.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatumPayload {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub datum_type: Option<DatumType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_list: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_image: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_file: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_video: Option<bool>,
}

impl DatumPayload {
    pub fn new(datum_type: DatumType, label: &str) -> Self {
        Self {
            datum_type: Some(datum_type),
            label: Some(label.to_string()),
            ..Default::default()
        }
    }

    /// A price datum for an item
    pub fn price(label: &str, value: &str, currency: &str, item: Iri) -> Self {
        Self {
            value: Some(value.to_string()),
            currency: Some(currency.to_string()),
            item: Some(item),
            ..Self::new(DatumType::Price, label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Resource;
    use serde_json::json;

    #[test]
    fn price_payload_uses_type_tag() {
        let payload = DatumPayload::price("Cost", "99.99", "USD", Item::iri_for("I1"));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "type": "price",
                "label": "Cost",
                "value": "99.99",
                "currency": "USD",
                "item": "/api/items/I1"
            })
        );
    }

    #[test]
    fn price_parses_only_for_price_data() {
        let datum: Datum = serde_json::from_value(json!({
            "@id": "/api/data/D1",
            "@type": "Datum",
            "type": "price",
            "label": "Cost",
            "value": "99.99",
            "currency": "USD",
            "item": "/api/items/I1"
        }))
        .unwrap();
        assert_eq!(datum.price(), Some(99.99));
        assert_eq!(datum.meta.kind.as_deref(), Some("Datum"));

        let text = Datum {
            datum_type: DatumType::Text,
            ..datum
        };
        assert_eq!(text.price(), None);
    }
}
