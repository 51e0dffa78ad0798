/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;

pub const JSON_LD: &str = "application/ld+json";

/// One page of a Hydra collection. Only `member` is used for iteration, the
/// rest is kept for callers that look at a raw page.
#[derive(Deserialize, Debug)]
pub struct HydraCollection<T> {
    #[serde(alias = "hydra:member")]
    pub member: Vec<T>,

    #[serde(default, rename = "totalItems", alias = "hydra:totalItems")]
    pub total_items: Option<u64>,

    #[serde(default, alias = "hydra:view")]
    pub view: Option<HydraView>,
}

#[derive(Deserialize, Debug, Default)]
pub struct HydraView {
    #[serde(default, rename = "@id")]
    pub id: Option<String>,

    #[serde(default, alias = "hydra:next")]
    pub next: Option<String>,

    #[serde(default, alias = "hydra:last")]
    pub last: Option<String>,
}

/// True when the content type announces a JSON-LD document
pub fn is_json_ld(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(JSON_LD))
}
