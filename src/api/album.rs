/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_many, related_one};
use crate::api::parsers::from_empty_str_to_none;
use crate::api::{Create, Delete, Get, HasImage, Iri, List, Metadata, Photo, Update, Visibility};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Album API.
///
/// Albums form a tree through `parent` and own [`Photo`]s. The effective
/// visibility, after inheriting from ancestors, is in `final_visibility`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[serde(flatten)]
    pub meta: Metadata,

    pub title: String,

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

impl_resource!(Album, "albums");

impl Get for Album {}
impl List for Album {}
impl Delete for Album {}
impl HasImage for Album {}

impl Create for Album {
    type Payload = AlbumPayload;
}

impl Update for Album {
    type Payload = AlbumPayload;
}

impl Album {
    related_many!(
        /// Albums whose parent is album `id`
        children,
        "children",
        Album
    );

    related_one!(
        /// The parent of album `id`
        parent,
        "parent",
        Album
    );

    related_many!(
        /// Photos in album `id`
        photos,
        "photos",
        Photo
    );
}

/// Properties that can be used in the creation or update of an Album
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    /// Removes the current image when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_image: Option<bool>,
}

impl AlbumPayload {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Resource;
    use serde_json::json;

    #[test]
    fn create_payload_only_carries_set_fields() {
        let payload = AlbumPayload {
            visibility: Some(Visibility::Public),
            ..AlbumPayload::new("Holiday 2024")
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"title": "Holiday 2024", "visibility": "public"})
        );
    }

    #[test]
    fn decodes_server_album() {
        let album: Album = serde_json::from_value(json!({
            "@context": "/api/contexts/Album",
            "@id": "/api/albums/A1",
            "@type": "Album",
            "id": "A1",
            "title": "Holiday 2024",
            "visibility": "public",
            "finalVisibility": "public",
            "image": null,
            "owner": "/api/users/U1",
            "createdAt": "2024-01-02T03:04:05Z"
        }))
        .unwrap();
        assert_eq!(album.id().unwrap().as_str(), "A1");
        assert_eq!(album.iri().unwrap(), Album::iri_for("A1"));
        assert_eq!(album.meta.owner, Some(Iri::new("users", "U1")));
        assert_eq!(album.final_visibility, Some(Visibility::Public));
        assert!(album.image.is_none());
    }
}
