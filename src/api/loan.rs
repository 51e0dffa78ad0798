/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::{impl_resource, related_one};
use crate::api::{Create, Delete, Get, Iri, Item, List, Metadata, Update};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Loan API.
///
/// A loan is open while `returned_at` is unset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(flatten)]
    pub meta: Metadata,

    pub item: Iri,

    pub lent_to: String,

    pub lent_at: DateTime<Utc>,

    #[serde(default)]
    pub returned_at: Option<DateTime<Utc>>,
}

impl_resource!(Loan, "loans");

impl Get for Loan {}
impl List for Loan {}
impl Delete for Loan {}

impl Create for Loan {
    type Payload = LoanPayload;
}

impl Update for Loan {
    type Payload = LoanPayload;
}

impl Loan {
    related_one!(item, "item", Item);

    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Iri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lent_to: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lent_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<DateTime<Utc>>,
}
