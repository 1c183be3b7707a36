//! Database-backed store using SeaORM.
//!
//! Email uniqueness is enforced by the unique index on `users.email`;
//! a violation on insert surfaces as `AppError::Conflict`.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr};
use uuid::Uuid;

use super::entities::{blog, user};
use super::Store;
use crate::config::StorageBackend;
use crate::domain::{Blog, BlogId, NewBlog, User};
use crate::errors::{AppError, AppResult};
use crate::infra::db::Database;

/// Store backed by the `users` and `blogs` tables
pub struct DbStore {
    database: Database,
}

impl DbStore {
    /// Create new store over an already-migrated database
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

fn map_user_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("User"),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl Store for DbStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Database
    }

    async fn create_user(&self, email: String, password_hash: String) -> AppResult<User> {
        let active_model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(self.database.connection())
            .await
            .map_err(map_user_insert_error)?;

        tracing::debug!(email = %model.email, "user inserted");
        Ok(User::from(model))
    }

    async fn find_user(&self, email: &str) -> AppResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.database.connection())
            .await?;

        Ok(result.map(User::from))
    }

    async fn list_blogs(&self) -> AppResult<Vec<Blog>> {
        let models = blog::Entity::find()
            .order_by_desc(blog::Column::Date)
            .all(self.database.connection())
            .await?;

        Ok(models.into_iter().map(Blog::from).collect())
    }

    async fn create_blog(&self, new_blog: NewBlog) -> AppResult<Blog> {
        new_blog.ensure_complete()?;

        let id = Uuid::new_v4();
        let draft = new_blog.into_blog(BlogId::Generated(id));
        let active_model = blog::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            content: Set(draft.content),
            author: Set(draft.author),
            date: Set(draft.date),
        };

        let model = active_model.insert(self.database.connection()).await?;
        tracing::debug!(id = %model.id, "blog inserted");
        Ok(Blog::from(model))
    }

    async fn delete_blog(&self, id: BlogId) -> AppResult<bool> {
        // Timestamp ids are only ever issued by the file store
        let BlogId::Generated(uuid) = id else {
            return Ok(false);
        };

        let result = blog::Entity::delete_by_id(uuid)
            .exec(self.database.connection())
            .await?;

        tracing::debug!(%id, rows = result.rows_affected, "blog delete");
        Ok(result.rows_affected > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        self.database.ping().await.map_err(AppError::from)
    }
}
