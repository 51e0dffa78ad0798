/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::identifiers::{Id, Iri};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON-LD envelope fields every resource carries.
///
/// All of these are server supplied; they are flattened into each resource on
/// the way in and never sent back.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    /// Context IRI, or the context object when the server inlines it
    #[serde(default, rename = "@context", skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(default, rename = "@id", skip_serializing_if = "Option::is_none")]
    pub iri: Option<Iri>,

    #[serde(default, rename = "@type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, rename = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, rename = "owner", skip_serializing_if = "Option::is_none")]
    pub owner: Option<Iri>,
}

impl Metadata {
    /// The identifier, taken from `id` or else from the tail of `@id`
    pub fn id(&self) -> Option<Id> {
        self.id
            .clone()
            .or_else(|| self.iri.as_ref().and_then(Iri::id))
    }

    /// The IRI, taken from `@id` or else rebuilt from `id`
    pub fn iri(&self, collection: &str) -> Option<Iri> {
        self.iri
            .clone()
            .or_else(|| self.id.as_ref().map(|id| Iri::new(collection, id)))
    }
}
