/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::impl_resource;
use crate::api::parsers::from_null_to_empty_vec;
use crate::api::{Create, Delete, Get, List, Metadata, Update};
use serde::{Deserialize, Serialize};

/// Named set of choices a `choice_list` datum or field picks from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceList {
    #[serde(flatten)]
    pub meta: Metadata,

    pub name: String,

    #[serde(default, deserialize_with = "from_null_to_empty_vec")]
    pub choices: Vec<String>,
}

impl_resource!(ChoiceList, "choice_lists");

impl Get for ChoiceList {}
impl List for ChoiceList {}
impl Delete for ChoiceList {}

impl Create for ChoiceList {
    type Payload = ChoiceListPayload;
}

impl Update for ChoiceList {
    type Payload = ChoiceListPayload;
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
pub struct ChoiceListPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl ChoiceListPayload {
    pub fn new(name: &str, choices: &[&str]) -> Self {
        Self {
            name: Some(name.to_string()),
            choices: Some(choices.iter().map(|c| c.to_string()).collect()),
        }
    }
}
