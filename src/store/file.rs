/**
 * Flat-File JSON Store
 *
 * Stores users and ideas as pretty-printed JSON arrays in `users.json` and
 * `ideas.json` under a data directory. Every mutation reads the whole file,
 * modifies the array in memory, and rewrites the file wholesale.
 *
 * Writers within the process are serialized by a `tokio::sync::Mutex`, so
 * concurrent mutations cannot drop each other's updates. Rewrites go
 * through a temp file followed by a rename, so readers (which do not take
 * the lock) never observe a partially written file. There is still no
 * cross-process locking: the deployment model is a single server process.
 *
 * A missing file reads as an empty collection; `open` seeds both files so
 * a fresh data directory starts valid.
 */

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Idea, IdeaPatch, NewIdea, NewUser, User, UserPatch};
use crate::store::{apply_idea_patch, apply_user_patch, Store};

/// Flat-file JSON storage backend.
pub struct FileStore {
    users_path: PathBuf,
    ideas_path: PathBuf,
    /// Serializes read-modify-write cycles across both files.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store rooted at `data_dir`, creating the directory and empty
    /// data files if they do not exist yet.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir).await?;

        let store = Self {
            users_path: data_dir.join("users.json"),
            ideas_path: data_dir.join("ideas.json"),
            write_lock: Mutex::new(()),
        };

        for path in [&store.users_path, &store.ideas_path] {
            if tokio::fs::try_exists(path).await? {
                continue;
            }
            tokio::fs::write(path, "[]").await?;
            tracing::info!("initialized empty data file at {}", path.display());
        }

        Ok(store)
    }

    async fn read_users(&self) -> Result<Vec<User>, StoreError> {
        read_records(&self.users_path).await
    }

    async fn read_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        read_records(&self.ideas_path).await
    }

    async fn write_users(&self, users: &[User]) -> Result<(), StoreError> {
        write_records(&self.users_path, users).await
    }

    async fn write_ideas(&self, ideas: &[Idea]) -> Result<(), StoreError> {
        write_records(&self.ideas_path, ideas).await
    }
}

async fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&data)?)
}

async fn write_records<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let data = serde_json::to_string_pretty(records)?;
    // `tokio::fs::write` truncates before writing, so a concurrent reader
    // could see a half-written file. Write a sibling temp file and rename
    // it into place instead; the rename is atomic on the same filesystem.
    let tmp_path = path.with_extension("tmp");
    tokio::fs::write(&tmp_path, data).await?;
    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}

fn sort_newest_first(ideas: &mut [Idea]) {
    ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl Store for FileStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.read_users().await?;

        // Uniqueness is enforced here, under the lock, so two concurrent
        // signups for the same email cannot both succeed.
        if users.iter().any(|user| user.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: new_user.email,
            display_name: new_user.display_name,
            password_hash: new_user.password_hash,
            photo_url: new_user.photo_url,
            created_at: Utc::now(),
        };

        users.push(user.clone());
        self.write_users(&users).await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let users = self.read_users().await?;
        Ok(users.into_iter().find(|user| user.id == id))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.read_users().await?;
        Ok(users.into_iter().find(|user| user.email == email))
    }

    async fn find_all_users(&self) -> Result<Vec<User>, StoreError> {
        self.read_users().await
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.read_users().await?;

        let Some(user) = users.iter_mut().find(|user| user.id == id) else {
            return Ok(None);
        };
        apply_user_patch(user, patch);
        let updated = user.clone();

        self.write_users(&users).await?;
        Ok(Some(updated))
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.read_users().await?;

        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Ok(false);
        }

        self.write_users(&users).await?;
        Ok(true)
    }

    async fn create_idea(&self, new_idea: NewIdea) -> Result<Idea, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut ideas = self.read_ideas().await?;

        let idea = Idea {
            id: Uuid::new_v4().to_string(),
            text: new_idea.text,
            user_id: new_idea.user_id,
            user_name: new_idea.user_name,
            user_photo_url: new_idea.user_photo_url,
            created_at: Utc::now(),
            is_marketplace: new_idea.is_marketplace,
        };

        ideas.push(idea.clone());
        self.write_ideas(&ideas).await?;
        Ok(idea)
    }

    async fn find_idea_by_id(&self, id: &str) -> Result<Option<Idea>, StoreError> {
        let ideas = self.read_ideas().await?;
        Ok(ideas.into_iter().find(|idea| idea.id == id))
    }

    async fn find_ideas_by_user(&self, user_id: &str) -> Result<Vec<Idea>, StoreError> {
        let mut ideas = self.read_ideas().await?;
        ideas.retain(|idea| idea.user_id == user_id);
        sort_newest_first(&mut ideas);
        Ok(ideas)
    }

    async fn find_marketplace_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let mut ideas = self.read_ideas().await?;
        ideas.retain(|idea| idea.is_marketplace);
        sort_newest_first(&mut ideas);
        Ok(ideas)
    }

    async fn find_all_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let mut ideas = self.read_ideas().await?;
        sort_newest_first(&mut ideas);
        Ok(ideas)
    }

    async fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<Option<Idea>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut ideas = self.read_ideas().await?;

        let Some(idea) = ideas.iter_mut().find(|idea| idea.id == id) else {
            return Ok(None);
        };
        apply_idea_patch(idea, patch);
        let updated = idea.clone();

        self.write_ideas(&ideas).await?;
        Ok(Some(updated))
    }

    async fn delete_idea(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut ideas = self.read_ideas().await?;

        let before = ideas.len();
        ideas.retain(|idea| idea.id != id);
        if ideas.len() == before {
            return Ok(false);
        }

        self.write_ideas(&ideas).await?;
        Ok(true)
    }

    async fn delete_ideas_by_user(&self, user_id: &str) -> Result<u64, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.delete_ideas_by_user_locked(user_id).await
    }

    async fn delete_user_with_ideas(&self, user_id: &str) -> Result<u64, StoreError> {
        // One lock acquisition across both rewrites, so the cascade cannot
        // interleave with another writer.
        let _guard = self.write_lock.lock().await;

        let deleted = self.delete_ideas_by_user_locked(user_id).await?;

        let mut users = self.read_users().await?;
        users.retain(|user| user.id != user_id);
        self.write_users(&users).await?;

        Ok(deleted)
    }
}

impl FileStore {
    /// Idea cascade shared by `delete_ideas_by_user` and
    /// `delete_user_with_ideas`. Caller must hold `write_lock`.
    async fn delete_ideas_by_user_locked(&self, user_id: &str) -> Result<u64, StoreError> {
        let mut ideas = self.read_ideas().await?;

        let before = ideas.len();
        ideas.retain(|idea| idea.user_id != user_id);
        let deleted = (before - ideas.len()) as u64;

        if deleted > 0 {
            self.write_ideas(&ideas).await?;
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    async fn temp_store() -> (FileStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        (store, dir)
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
    async fn test_open_seeds_empty_files() {
        let (_store, dir) = temp_store().await;
        let users = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        let ideas = std::fs::read_to_string(dir.path().join("ideas.json")).unwrap();
        assert_eq!(users, "[]");
        assert_eq!(ideas, "[]");
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let (store, _dir) = temp_store().await;
        let created = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        let by_id = store.find_user_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ann@example.com");

        let by_email = store.find_user_by_email("ann@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        assert!(store.find_user_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let (store, _dir) = temp_store().await;
        store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        let result = store.create_user(new_user("ann@example.com", "Imposter")).await;
        assert!(matches!(result, Err(StoreError::DuplicateEmail)));
        assert_eq!(store.find_all_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_users_oldest_first() {
        let (store, _dir) = temp_store().await;
        store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();
        store.create_user(new_user("bob@example.com", "Bob")).await.unwrap();

        let users = store.find_all_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].display_name, "Ann");
        assert_eq!(users[1].display_name, "Bob");
    }

    #[tokio::test]
    async fn test_reads_never_observe_partial_rewrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(FileStore::open(dir.path()).await.unwrap());
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        let writer = {
            let store = store.clone();
            let user = user.clone();
            tokio::spawn(async move {
                for i in 0..50 {
                    store
                        .create_idea(new_idea(&user, &format!("idea {i}")))
                        .await
                        .unwrap();
                }
            })
        };
        let reader = {
            let store = store.clone();
            tokio::spawn(async move {
                // Unlocked reads racing the rewrites must parse cleanly
                // every time, never erroring on a torn file.
                for _ in 0..50 {
                    store.find_all_ideas().await.unwrap();
                    tokio::task::yield_now().await;
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();
        assert_eq!(store.find_all_ideas().await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_update_user_is_shallow_merge() {
        let (store, _dir) = temp_store().await;
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        let patch = UserPatch {
            display_name: Some("Annie".to_string()),
            photo_url: Some("https://example.com/a.png".to_string()),
            ..Default::default()
        };
        let updated = store.update_user(&user.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.display_name, "Annie");
        assert_eq!(updated.photo_url.as_deref(), Some("https://example.com/a.png"));
        // Untouched fields survive the merge.
        assert_eq!(updated.email, "ann@example.com");
        assert_eq!(updated.password_hash, user.password_hash);
    }

    #[tokio::test]
    async fn test_update_missing_user_returns_none() {
        let (store, _dir) = temp_store().await;
        let result = store.update_user("missing", UserPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_user_reports_removal() {
        let (store, _dir) = temp_store().await;
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        assert!(store.delete_user(&user.id).await.unwrap());
        assert!(!store.delete_user(&user.id).await.unwrap());
        assert!(store.find_user_by_id(&user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ideas_sorted_newest_first() {
        let (store, _dir) = temp_store().await;
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        store.create_idea(new_idea(&user, "first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        store.create_idea(new_idea(&user, "second")).await.unwrap();

        let feed = store.find_ideas_by_user(&user.id).await.unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].text, "second");
        assert_eq!(feed[1].text, "first");

        let all = store.find_all_ideas().await.unwrap();
        assert_eq!(all[0].text, "second");
    }

    #[tokio::test]
    async fn test_marketplace_filter() {
        let (store, _dir) = temp_store().await;
        let user = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();

        let kept_private = store.create_idea(new_idea(&user, "private")).await.unwrap();
        let published = store.create_idea(new_idea(&user, "published")).await.unwrap();
        store
            .update_idea(
                &published.id,
                IdeaPatch {
                    is_marketplace: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let marketplace = store.find_marketplace_ideas().await.unwrap();
        assert_eq!(marketplace.len(), 1);
        assert_eq!(marketplace[0].id, published.id);
        assert!(marketplace.iter().all(|idea| idea.id != kept_private.id));
    }

    #[tokio::test]
    async fn test_delete_ideas_by_user_returns_count() {
        let (store, _dir) = temp_store().await;
        let ann = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();
        let bob = store.create_user(new_user("bob@example.com", "Bob")).await.unwrap();

        store.create_idea(new_idea(&ann, "one")).await.unwrap();
        store.create_idea(new_idea(&ann, "two")).await.unwrap();
        store.create_idea(new_idea(&bob, "keep")).await.unwrap();

        let deleted = store.delete_ideas_by_user(&ann.id).await.unwrap();
        assert_eq!(deleted, 2);
        assert!(store.find_ideas_by_user(&ann.id).await.unwrap().is_empty());
        assert_eq!(store.find_ideas_by_user(&bob.id).await.unwrap().len(), 1);

        // Second invocation has nothing left to remove.
        assert_eq!(store.delete_ideas_by_user(&ann.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_user_with_ideas_cascades() {
        let (store, _dir) = temp_store().await;
        let ann = store.create_user(new_user("ann@example.com", "Ann")).await.unwrap();
        store.create_idea(new_idea(&ann, "gone soon")).await.unwrap();

        let deleted = store.delete_user_with_ideas(&ann.id).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(store.find_user_by_id(&ann.id).await.unwrap().is_none());
        assert!(store.find_ideas_by_user(&ann.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_files_read_as_empty() {
        let (store, dir) = temp_store().await;
        std::fs::remove_file(dir.path().join("ideas.json")).unwrap();
        assert!(store.find_all_ideas().await.unwrap().is_empty());
    }
}
