/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_one};
use crate::api::{Create, Delete, FieldType, Get, Iri, List, Metadata, Template, Update, Visibility};
use serde::{Deserialize, Serialize};

/// One field of a [`Template`]. Applying a template creates a datum per field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(flatten)]
    pub meta: Metadata,

    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub position: Option<i32>,

    pub template: Iri,

    #[serde(default)]
    pub choice_list: Option<Iri>,

    #[serde(default)]
    pub visibility: Visibility,
}

impl_resource!(Field, "fields");

impl Get for Field {}
impl List for Field {}
impl Delete for Field {}

impl Create for Field {
    type Payload = FieldPayload;
}

impl Update for Field {
    type Payload = FieldPayload;
}

impl Field {
    related_one!(template, "template", Template);
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_list: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}
