use crate::error::ServiceResult;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const INFO_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A user record.
///
/// Serialized field names are camelCase (`createdAt`, `isActive`) so that
/// external consumers see a stable JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the manager on insert; 0 until then
    pub id: u64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    /// Create an active user stamped with the current time.
    ///
    /// The id is left at 0; [`UserManager::add_user`](crate::services::UserManager::add_user)
    /// assigns the real one.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
            is_active: true,
        }
    }

    /// One-line description of the record, with `created_at` as `YYYY-MM-DD HH:MM:SS`.
    pub fn info(&self) -> String {
        format!(
            "User {{ id: {}, name: {}, email: {}, created_at: {}, is_active: {} }}",
            self.id,
            self.name,
            self.email,
            self.created_at.format(INFO_TIME_FORMAT),
            self.is_active
        )
    }

    /// Replace name and/or email. An empty argument leaves that field untouched.
    pub fn update_info(&mut self, new_name: &str, new_email: &str) {
        if !new_name.is_empty() {
            self.name = new_name.to_string();
        }
        if !new_email.is_empty() {
            self.email = new_email.to_string();
        }
    }

    pub fn to_json(&self) -> ServiceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(input: &str) -> ServiceResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}
