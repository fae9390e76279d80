/**
 * Data Model
 *
 * This module defines the two record types the service stores, plus the
 * wire-facing user profile. Serde attributes pin the wire (and flat-file)
 * field names to the original camelCase format, so existing data files and
 * clients keep working.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// `password_hash` is a bcrypt hash; it is stored but never exposed through
/// the API (responses use [`UserProfile`]).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (UUID, string form)
    pub id: String,
    /// Email address (unique)
    pub email: String,
    /// Display name shown on posts
    pub display_name: String,
    /// bcrypt password hash
    pub password_hash: String,
    /// Optional avatar URL
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// A short text post, optionally published to the Marketplace.
///
/// `user_name` and `user_photo_url` are denormalized copies of the owner's
/// display fields taken at creation time. They are not kept in sync with
/// later profile edits.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Unique idea ID (UUID, string form)
    pub id: String,
    /// Idea text (3-280 characters)
    pub text: String,
    /// Owning user's ID
    pub user_id: String,
    /// Owner display name at creation time
    pub user_name: String,
    /// Owner avatar URL at creation time
    #[serde(rename = "userPhotoURL", default, skip_serializing_if = "Option::is_none")]
    pub user_photo_url: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Whether the idea is published to the Marketplace
    pub is_marketplace: bool,
}

/// The authenticated user profile returned by the API.
///
/// This is the one canonical projection of a stored [`User`] onto the wire;
/// the stored record is authoritative for all display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            photo_url: user.photo_url.clone(),
        }
    }
}

/// One row of the users directory: display name and email, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            name: user.display_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Input for creating a user. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub photo_url: Option<String>,
}

/// Input for creating an idea. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewIdea {
    pub text: String,
    pub user_id: String,
    pub user_name: String,
    pub user_photo_url: Option<String>,
    pub is_marketplace: bool,
}

/// Shallow-merge update for a user record. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub password_hash: Option<String>,
    pub photo_url: Option<String>,
}

/// Shallow-merge update for an idea record. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdeaPatch {
    pub text: Option<String>,
    pub is_marketplace: Option<bool>,
}
