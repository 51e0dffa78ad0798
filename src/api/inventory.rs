/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::impl_resource;
use crate::api::{Delete, Get, List, Metadata};
use serde::{Deserialize, Serialize};

/// Snapshot of a user's collections taken by the server.
///
/// Inventories are generated server side; the API only reads and deletes them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(flatten)]
    pub meta: Metadata,

    pub name: String,

    /// Checklist tree, kept as the server sent it
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

impl_resource!(Inventory, "inventories");

impl Get for Inventory {}
impl List for Inventory {}
impl Delete for Inventory {}
