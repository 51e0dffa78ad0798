/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_many};
use crate::api::{Create, Delete, Field, Get, List, Metadata, Update};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Template API.
///
/// The fields themselves are listed through [`Template::fields`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(flatten)]
    pub meta: Metadata,

    pub name: String,
}

impl_resource!(Template, "templates");

impl Get for Template {}
impl List for Template {}
impl Delete for Template {}

impl Create for Template {
    type Payload = TemplatePayload;
}

impl Update for Template {
    type Payload = TemplatePayload;
}

impl Template {
    related_many!(
        /// Fields of template `id`, paged through `/api/templates/<id>/fields`
        fields,
        "fields",
        Field
    );
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
pub struct TemplatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TemplatePayload {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
        }
    }
}
