//! JSON file-backed store.
//!
//! Both collections live in one document:
//!
//! ```json
//! { "users": [ ... ], "blogs": [ ... ] }
//! ```
//!
//! Every operation reads the whole document and every mutation rewrites it.
//! Mutations are serialized through a single async mutex and land on disk via
//! write-to-temp + rename, so readers never see a half-written file.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use super::Store;
use crate::config::StorageBackend;
use crate::domain::{sort_newest_first, Blog, BlogId, NewBlog, User};
use crate::errors::{AppError, AppResult};

/// On-disk document layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    blogs: Vec<Blog>,
}

/// Store persisting everything in a single JSON file
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store over `path`. The file is created on first write;
    /// a missing file reads as an empty document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> AppResult<Document> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Document::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, doc: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Read-modify-write under the writer lock.
    async fn mutate<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Document) -> AppResult<T> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load().await?;
        let out = f(&mut doc)?;
        self.save(&doc).await?;
        Ok(out)
    }
}

/// Millisecond timestamp id, bumped past the newest existing one so two
/// blogs created within the same millisecond still get distinct ids.
fn next_blog_id(blogs: &[Blog], now_millis: i64) -> BlogId {
    let newest = blogs
        .iter()
        .filter_map(|b| match b.id {
            BlogId::Timestamp(millis) => Some(millis),
            BlogId::Generated(_) => None,
        })
        .max();

    match newest {
        Some(max) if max >= now_millis => BlogId::Timestamp(max + 1),
        _ => BlogId::Timestamp(now_millis),
    }
}

#[async_trait]
impl Store for FileStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::File
    }

    async fn create_user(&self, email: String, password_hash: String) -> AppResult<User> {
        let user = self
            .mutate(move |doc| {
                if doc.users.iter().any(|u| u.email == email) {
                    return Err(AppError::conflict("User"));
                }
                let user = User::new(email, password_hash);
                doc.users.push(user.clone());
                Ok(user)
            })
            .await?;

        tracing::debug!(email = %user.email, "user persisted to file store");
        Ok(user)
    }

    async fn find_user(&self, email: &str) -> AppResult<Option<User>> {
        let doc = self.load().await?;
        Ok(doc.users.into_iter().find(|u| u.email == email))
    }

    async fn list_blogs(&self) -> AppResult<Vec<Blog>> {
        let mut blogs = self.load().await?.blogs;
        sort_newest_first(&mut blogs);
        Ok(blogs)
    }

    async fn create_blog(&self, blog: NewBlog) -> AppResult<Blog> {
        blog.ensure_complete()?;

        let blog = self
            .mutate(move |doc| {
                let id = next_blog_id(&doc.blogs, Utc::now().timestamp_millis());
                let blog = blog.into_blog(id);
                doc.blogs.push(blog.clone());
                Ok(blog)
            })
            .await?;

        tracing::debug!(id = %blog.id, "blog persisted to file store");
        Ok(blog)
    }

    async fn delete_blog(&self, id: BlogId) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load().await?;

        let before = doc.blogs.len();
        doc.blogs.retain(|b| b.id != id);
        let deleted = doc.blogs.len() != before;

        // A miss leaves the file untouched
        if deleted {
            self.save(&doc).await?;
        }

        tracing::debug!(%id, deleted, "blog delete on file store");
        Ok(deleted)
    }

    async fn ping(&self) -> AppResult<()> {
        self.load().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("data").join("db.json"))
    }

    fn new_blog(title: &str) -> NewBlog {
        NewBlog::new(title.into(), "content".into(), "author".into())
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.list_blogs().await.unwrap().is_empty());
        assert!(store.find_user("a@kletech.ac.in").await.unwrap().is_none());
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_document_layout_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .create_user("a@kletech.ac.in".into(), "hash".into())
            .await
            .unwrap();
        store.create_blog(new_blog("first")).await.unwrap();

        let raw = std::fs::read(store.path()).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(doc["users"].as_array().unwrap().len(), 1);
        assert_eq!(doc["users"][0]["email"], "a@kletech.ac.in");
        assert_eq!(doc["blogs"].as_array().unwrap().len(), 1);
        assert!(doc["blogs"][0]["id"].is_i64());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .create_user("a@kletech.ac.in".into(), "hash".into())
            .await
            .unwrap();
        let second = store
            .create_user("a@kletech.ac.in".into(), "other".into())
            .await;

        assert!(matches!(second, Err(AppError::Conflict(_))));
        let user = store.find_user("a@kletech.ac.in").await.unwrap().unwrap();
        assert_eq!(user.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_blog_ids_unique_within_same_millisecond() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(store.create_blog(new_blog(&format!("b{}", i))).await.unwrap().id);
        }
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_next_blog_id_bumps_past_newest() {
        let existing = vec![new_blog("x").into_blog(BlogId::Timestamp(1_000))];
        assert_eq!(next_blog_id(&existing, 1_000), BlogId::Timestamp(1_001));
        assert_eq!(next_blog_id(&existing, 5_000), BlogId::Timestamp(5_000));
        assert_eq!(next_blog_id(&[], 7), BlogId::Timestamp(7));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let at = |day| Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();

        for day in [2, 9, 5] {
            store
                .create_blog(new_blog(&format!("day {}", day)).with_date(at(day)))
                .await
                .unwrap();
        }

        let titles: Vec<_> = store
            .list_blogs()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["day 9", "day 5", "day 2"]);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let blog = store.create_blog(new_blog("doomed")).await.unwrap();

        assert!(!store.delete_blog(BlogId::Timestamp(-1)).await.unwrap());
        assert_eq!(store.list_blogs().await.unwrap().len(), 1);

        assert!(store.delete_blog(blog.id).await.unwrap());
        assert!(store.list_blogs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_miss_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(!store.delete_blog(BlogId::Timestamp(1)).await.unwrap());
        assert!(!store.path().exists());

        store.create_blog(new_blog("kept")).await.unwrap();
        // Compact on disk; a rewrite would come back pretty-printed
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
        let compact = serde_json::to_vec(&doc).unwrap();
        std::fs::write(store.path(), &compact).unwrap();

        assert!(!store.delete_blog(BlogId::Timestamp(1)).await.unwrap());
        assert_eq!(std::fs::read(store.path()).unwrap(), compact);
    }

    #[tokio::test]
    async fn test_incomplete_blog_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let result = store
            .create_blog(NewBlog::new("t".into(), String::new(), "a".into()))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_concurrent_writes_do_not_lose_updates() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(store_in(&dir));

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create_blog(new_blog(&format!("b{}", i))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.list_blogs().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), b"{ not json").unwrap();

        let result = store.list_blogs().await;
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }
}
