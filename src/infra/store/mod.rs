//! Store layer - persistence for the User and Blog collections.
//!
//! The HTTP layer only ever sees `Arc<dyn Store>`; which backend sits
//! behind it is decided once at startup.

pub(crate) mod entities;
mod db_store;
mod file_store;

use async_trait::async_trait;

use crate::config::StorageBackend;
use crate::domain::{Blog, BlogId, NewBlog, User};
use crate::errors::AppResult;

pub use db_store::DbStore;
pub use file_store::FileStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage abstraction shared by the file and database backends.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Which backend this is
    fn backend(&self) -> StorageBackend;

    /// Persist a new user.
    ///
    /// Fails with `AppError::Conflict` if the email is already taken.
    async fn create_user(&self, email: String, password_hash: String) -> AppResult<User>;

    /// Find a user by exact email match
    async fn find_user(&self, email: &str) -> AppResult<Option<User>>;

    /// All blogs, newest first
    async fn list_blogs(&self) -> AppResult<Vec<Blog>>;

    /// Assign id and date, then persist
    async fn create_blog(&self, blog: NewBlog) -> AppResult<Blog>;

    /// Remove a blog; returns whether anything was deleted
    async fn delete_blog(&self, id: BlogId) -> AppResult<bool>;

    /// Check that the backend is reachable
    async fn ping(&self) -> AppResult<()>;
}
