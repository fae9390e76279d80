/**
 * SQLite Store
 *
 * `sqlx`-backed storage. This backend fills the role of the managed
 * document store from the hosted deployment: indexed queries, real
 * transactions, no whole-file rewrites.
 *
 * The schema lives in embedded migrations (`migrations/`) and is applied
 * on connect. Ids are UUID strings, timestamps are RFC 3339 TEXT columns
 * decoded through sqlx's chrono support.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Idea, IdeaPatch, NewIdea, NewUser, User, UserPatch};
use crate::store::{apply_idea_patch, apply_user_patch, Store};

const USER_COLUMNS: &str = "id, email, display_name, password_hash, photo_url, created_at";
const IDEA_COLUMNS: &str =
    "id, text, user_id, user_name, user_photo_url, created_at, is_marketplace";

/// SQLite storage backend.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `url` (e.g. `sqlite://data/ideastream.db?mode=rwc`) and
    /// apply pending migrations.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        tracing::info!("connecting to sqlite store");
        let pool = SqlitePool::connect(url).await?;
        Self::from_pool(pool).await
    }

    /// Build a store from an existing pool, applying pending migrations.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("sqlite migrations applied");
        Ok(Self { pool })
    }

    async fn insert_idea(&self, idea: &Idea) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO ideas (id, text, user_id, user_name, user_photo_url, created_at, is_marketplace) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&idea.id)
        .bind(&idea.text)
        .bind(&idea.user_id)
        .bind(&idea.user_name)
        .bind(&idea.user_photo_url)
        .bind(idea.created_at)
        .bind(idea.is_marketplace)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: new_user.email,
            display_name: new_user.display_name,
            password_hash: new_user.password_hash,
            photo_url: new_user.photo_url,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO users (id, email, display_name, password_hash, photo_url, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(&user.photo_url)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The UNIQUE index on email enforces signup uniqueness; surface
            // that case distinctly so callers can answer 400 instead of 500.
            if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                StoreError::DuplicateEmail
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_all_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>, StoreError> {
        let Some(mut user) = self.find_user_by_id(id).await? else {
            return Ok(None);
        };
        apply_user_patch(&mut user, patch);

        sqlx::query(
            "UPDATE users SET email = ?, display_name = ?, password_hash = ?, photo_url = ? \
             WHERE id = ?",
        )
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(&user.photo_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Some(user))
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_idea(&self, new_idea: NewIdea) -> Result<Idea, StoreError> {
        let idea = Idea {
            id: Uuid::new_v4().to_string(),
            text: new_idea.text,
            user_id: new_idea.user_id,
            user_name: new_idea.user_name,
            user_photo_url: new_idea.user_photo_url,
            created_at: Utc::now(),
            is_marketplace: new_idea.is_marketplace,
        };
        self.insert_idea(&idea).await?;
        Ok(idea)
    }

    async fn find_idea_by_id(&self, id: &str) -> Result<Option<Idea>, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(&format!(
            "SELECT {IDEA_COLUMNS} FROM ideas WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(idea)
    }

    async fn find_ideas_by_user(&self, user_id: &str) -> Result<Vec<Idea>, StoreError> {
        let ideas = sqlx::query_as::<_, Idea>(&format!(
            "SELECT {IDEA_COLUMNS} FROM ideas WHERE user_id = ? ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ideas)
    }

    async fn find_marketplace_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let ideas = sqlx::query_as::<_, Idea>(&format!(
            "SELECT {IDEA_COLUMNS} FROM ideas WHERE is_marketplace = 1 ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(ideas)
    }

    async fn find_all_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let ideas = sqlx::query_as::<_, Idea>(&format!(
            "SELECT {IDEA_COLUMNS} FROM ideas ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(ideas)
    }

    async fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<Option<Idea>, StoreError> {
        let Some(mut idea) = self.find_idea_by_id(id).await? else {
            return Ok(None);
        };
        apply_idea_patch(&mut idea, patch);

        sqlx::query("UPDATE ideas SET text = ?, is_marketplace = ? WHERE id = ?")
            .bind(&idea.text)
            .bind(idea.is_marketplace)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Some(idea))
    }

    async fn delete_idea(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_ideas_by_user(&self, user_id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM ideas WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_user_with_ideas(&self, user_id: &str) -> Result<u64, StoreError> {
        // Single transaction: either the whole cascade lands or none of it.
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM ideas WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn memory_store() -> SqliteStore {
        // A pooled :memory: database only exists per connection, so the
        // test pool is pinned to a single connection.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteStore::from_pool(pool).await.unwrap()
    }

    fn new_user(email: &str, name: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            display_name: name.to_string(),
            password_hash: "$2b$12$hash".to_string(),
            photo_url: None,
        }
    }

    fn new_idea(user: &User, text: &str) -> NewIdea {
        NewIdea {
            text: text.to_string(),
            user_id: user.id.clone(),
            user_name: user.display_name.clone(),
            user_photo_url: user.photo_url.clone(),
            is_marketplace: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let store = memory_store().await;
        let created = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        let by_email = store.find_user_by_email("ann@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_email.display_name, "Ann");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_by_schema() {
        let store = memory_store().await;
        store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();
        let result = store.create_user(new_user("ann@example.com", "Imposter")).await;
        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_find_all_users_oldest_first() {
        let store = memory_store().await;
        store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.create_user(new_user("bob@example.com", "Bob")).await.unwrap();

        let users = store.find_all_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].display_name, "Ann");
        assert_eq!(users[1].display_name, "Bob");
    }

    #[tokio::test]
    async fn test_idea_roundtrip_and_ordering() {
        let store = memory_store().await;
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        store.create_idea(new_idea(&user, "first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.create_idea(new_idea(&user, "second")).await.unwrap();

        let feed = store.find_ideas_by_user(&user.id).await.unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].text, "second");
    }

    #[tokio::test]
    async fn test_marketplace_flag_update() {
        let store = memory_store().await;
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();
        let idea = store.create_idea(new_idea(&user, "publish me")).await.unwrap();

        let updated = store
            .update_idea(
                &idea.id,
                IdeaPatch {
                    is_marketplace: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.is_marketplace);

        let marketplace = store.find_marketplace_ideas().await.unwrap();
        assert_eq!(marketplace.len(), 1);
        assert_eq!(marketplace[0].id, idea.id);
    }

    #[tokio::test]
    async fn test_delete_user_with_ideas_is_transactional() {
        let store = memory_store().await;
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();
        store.create_idea(new_idea(&user, "one")).await.unwrap();
        store.create_idea(new_idea(&user, "two")).await.unwrap();

        let deleted = store.delete_user_with_ideas(&user.id).await.unwrap();
        assert_eq!(deleted, 2);
        assert!(store.find_user_by_id(&user.id).await.unwrap().is_none());
        assert!(store.find_ideas_by_user(&user.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_idea_idempotent_report() {
        let store = memory_store().await;
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();
        let idea = store.create_idea(new_idea(&user, "short lived")).await.unwrap();

        assert!(store.delete_idea(&idea.id).await.unwrap());
        assert!(!store.delete_idea(&idea.id).await.unwrap());
    }
}
