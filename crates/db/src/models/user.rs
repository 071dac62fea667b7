//! User entity model and DTOs.

use dvdshelf_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity fields reported by the auth provider on sign-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpsertUser {
    pub id: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpsertUser {
    /// Whether applying this upsert to `existing` would change anything.
    pub fn differs_from(&self, existing: &User) -> bool {
        self.email != existing.email
            || self.display_name != existing.display_name
            || self.avatar_url != existing.avatar_url
    }
}
