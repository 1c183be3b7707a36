//! Blog service - list, add and delete blogs.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Blog, BlogId, NewBlog};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

/// Blog service trait for dependency injection.
#[async_trait]
pub trait BlogService: Send + Sync {
    /// All blogs, newest first
    async fn list_blogs(&self) -> AppResult<Vec<Blog>>;

    /// Validate and persist a new blog
    async fn add_blog(&self, blog: NewBlog) -> AppResult<Blog>;

    /// Delete a blog, failing with `NotFound` if nothing matched
    async fn delete_blog(&self, id: BlogId) -> AppResult<()>;
}

/// Concrete implementation of BlogService over any Store.
pub struct BlogManager {
    store: Arc<dyn Store>,
}

impl BlogManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BlogService for BlogManager {
    async fn list_blogs(&self) -> AppResult<Vec<Blog>> {
        self.store.list_blogs().await
    }

    async fn add_blog(&self, blog: NewBlog) -> AppResult<Blog> {
        blog.ensure_complete()?;
        let blog = self.store.create_blog(blog).await?;
        tracing::info!(id = %blog.id, author = %blog.author, "blog added");
        Ok(blog)
    }

    async fn delete_blog(&self, id: BlogId) -> AppResult<()> {
        // Same contract on both backends: nothing removed means 404
        if !self.store.delete_blog(id).await? {
            return Err(AppError::NotFound("Blog"));
        }
        tracing::info!(%id, "blog deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MSG_ALL_FIELDS_REQUIRED;
    use crate::infra::MockStore;

    #[tokio::test]
    async fn test_add_blog_missing_field_never_reaches_store() {
        let mut store = MockStore::new();
        store.expect_create_blog().never();

        let service = BlogManager::new(Arc::new(store));
        let err = service
            .add_blog(NewBlog::new(String::new(), "content".into(), "author".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), MSG_ALL_FIELDS_REQUIRED);
    }

    #[tokio::test]
    async fn test_add_blog_returns_stored_entity() {
        let mut store = MockStore::new();
        store
            .expect_create_blog()
            .times(1)
            .returning(|blog| Ok(blog.into_blog(BlogId::Timestamp(99))));

        let service = BlogManager::new(Arc::new(store));
        let blog = service
            .add_blog(NewBlog::new("title".into(), "content".into(), "author".into()))
            .await
            .unwrap();

        assert_eq!(blog.id, BlogId::Timestamp(99));
        assert_eq!(blog.title, "title");
    }

    #[tokio::test]
    async fn test_delete_missing_blog_is_not_found() {
        let mut store = MockStore::new();
        store.expect_delete_blog().returning(|_| Ok(false));

        let service = BlogManager::new(Arc::new(store));
        let err = service.delete_blog(BlogId::Timestamp(1)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound("Blog")));
    }

    #[tokio::test]
    async fn test_delete_existing_blog() {
        let mut store = MockStore::new();
        store.expect_delete_blog().times(1).returning(|_| Ok(true));

        let service = BlogManager::new(Arc::new(store));
        assert!(service.delete_blog(BlogId::Timestamp(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut store = MockStore::new();
        store
            .expect_list_blogs()
            .returning(|| Err(AppError::internal("connection reset")));

        let service = BlogManager::new(Arc::new(store));
        let err = service.list_blogs().await.unwrap_err();

        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
