/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::macros::impl_resource;
use crate::api::parsers::{from_empty_str_to_none, from_null_to_empty_vec};
use crate::api::{DateFormat, Get, List, Metadata, Theme, Visibility};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the User API.
///
/// Users are read only through the API. Passwords never appear here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub meta: Metadata,

    pub username: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub avatar: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default)]
    pub date_format: Option<DateFormat>,

    #[serde(default)]
    pub theme: Option<Theme>,

    #[serde(default)]
    pub disk_space_used: Option<u64>,

    #[serde(default)]
    pub disk_space_allowed: Option<u64>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default, deserialize_with = "from_null_to_empty_vec")]
    pub roles: Vec<String>,

    #[serde(default)]
    pub last_date_of_activity: Option<DateTime<Utc>>,
}

impl_resource!(User, "users");

impl Get for User {}
impl List for User {}

impl User {
    /// Free space left in the user's quota, if the quota is known
    pub fn disk_space_free(&self) -> Option<u64> {
        Some(
            self.disk_space_allowed?
                .saturating_sub(self.disk_space_used.unwrap_or_default()),
        )
    }

    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == "ROLE_ADMIN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_user_settings() {
        let user: User = serde_json::from_value(json!({
            "@id": "/api/users/U1",
            "id": "U1",
            "username": "u",
            "dateFormat": "m/d/Y",
            "theme": "dark",
            "diskSpaceUsed": 100,
            "diskSpaceAllowed": 1000,
            "roles": ["ROLE_USER", "ROLE_ADMIN"]
        }))
        .unwrap();
        assert_eq!(user.date_format, Some(DateFormat::MonthSlashDaySlashYear));
        assert_eq!(user.theme, Some(Theme::Dark));
        assert_eq!(user.disk_space_free(), Some(900));
        assert!(user.is_admin());
    }
}
