/**
 * Storage Abstraction
 *
 * This module defines the `Store` trait: record-shaped CRUD over the two
 * collections the service keeps (`users`, `ideas`). Two backends implement
 * it:
 *
 * - `file` - flat JSON files (`users.json`, `ideas.json`), read and
 *   rewritten wholesale on every mutation. Suits the single-process,
 *   low-concurrency deployment model.
 * - `sqlite` - a `sqlx` SQLite pool with embedded migrations.
 *
 * The trait is injected into the application state as `Arc<dyn Store>`, so
 * handlers and actions never depend on a concrete backend.
 *
 * The store enforces no referential integrity and no ownership rules;
 * ownership checks live in the action layer.
 */

pub mod file;
pub mod sqlite;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Idea, IdeaPatch, NewIdea, NewUser, User, UserPatch};

pub use file::FileStore;
pub use sqlite::SqliteStore;

/// Record-shaped CRUD over users and ideas.
///
/// All list-returning idea queries sort newest first (`created_at`
/// descending). `update_*` performs a shallow merge over the existing
/// record and returns `None` when the record does not exist. `delete_*`
/// reports whether a record was actually removed.
#[async_trait]
pub trait Store: Send + Sync {
    // -- users --

    /// Create a user. Fails with [`StoreError::DuplicateEmail`] when the
    /// email is already registered; the check runs inside the backend's
    /// write path, so concurrent signups for one email cannot both land.
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// All registered users, oldest first.
    async fn find_all_users(&self) -> Result<Vec<User>, StoreError>;

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>, StoreError>;

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError>;

    // -- ideas --

    async fn create_idea(&self, new_idea: NewIdea) -> Result<Idea, StoreError>;

    async fn find_idea_by_id(&self, id: &str) -> Result<Option<Idea>, StoreError>;

    /// Ideas owned by `user_id`, newest first.
    async fn find_ideas_by_user(&self, user_id: &str) -> Result<Vec<Idea>, StoreError>;

    /// Ideas with `is_marketplace = true`, newest first.
    async fn find_marketplace_ideas(&self) -> Result<Vec<Idea>, StoreError>;

    /// All ideas across all users, newest first.
    async fn find_all_ideas(&self) -> Result<Vec<Idea>, StoreError>;

    async fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<Option<Idea>, StoreError>;

    async fn delete_idea(&self, id: &str) -> Result<bool, StoreError>;

    /// Bulk-delete all ideas owned by `user_id`. Returns the count removed.
    async fn delete_ideas_by_user(&self, user_id: &str) -> Result<u64, StoreError>;

    /// Delete a user together with all their ideas.
    ///
    /// Returns the number of ideas removed. Backends make this as atomic as
    /// they can: the SQLite backend runs both deletions in one transaction,
    /// the file backend holds its writer lock across both rewrites.
    async fn delete_user_with_ideas(&self, user_id: &str) -> Result<u64, StoreError>;
}

/// Merge a patch into a user record in place.
pub(crate) fn apply_user_patch(user: &mut User, patch: UserPatch) {
    if let Some(email) = patch.email {
        user.email = email;
    }
    if let Some(display_name) = patch.display_name {
        user.display_name = display_name;
    }
    if let Some(password_hash) = patch.password_hash {
        user.password_hash = password_hash;
    }
    if let Some(photo_url) = patch.photo_url {
        user.photo_url = Some(photo_url);
    }
}

/// Merge a patch into an idea record in place.
pub(crate) fn apply_idea_patch(idea: &mut Idea, patch: IdeaPatch) {
    if let Some(text) = patch.text {
        idea.text = text;
    }
    if let Some(is_marketplace) = patch.is_marketplace {
        idea.is_marketplace = is_marketplace;
    }
}
