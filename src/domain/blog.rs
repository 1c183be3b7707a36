//! Blog domain entity and related types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::MSG_ALL_FIELDS_REQUIRED;
use crate::errors::{AppError, AppResult};

/// Blog identifier.
///
/// The database backend assigns opaque UUIDs; the file backend derives an
/// integer from the creation time in milliseconds. On the wire a UUID is a
/// JSON string and a timestamp id is a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BlogId {
    Timestamp(i64),
    Generated(Uuid),
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogId::Timestamp(millis) => write!(f, "{}", millis),
            BlogId::Generated(uuid) => write!(f, "{}", uuid),
        }
    }
}

impl FromStr for BlogId {
    type Err = AppError;

    /// Parse a path segment. Anything that is neither an integer nor a UUID
    /// cannot name a stored blog, so it is reported as not found.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(millis) = s.parse::<i64>() {
            return Ok(BlogId::Timestamp(millis));
        }
        Uuid::parse_str(s)
            .map(BlogId::Generated)
            .map_err(|_| AppError::NotFound("Blog"))
    }
}

/// Blog domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Blog {
    /// Storage-assigned identifier (UUID string or integer)
    pub id: BlogId,
    #[schema(example = "Campus fest recap")]
    pub title: String,
    #[schema(example = "The cultural fest wrapped up on Sunday...")]
    pub content: String,
    #[schema(example = "Asha")]
    pub author: String,
    /// Creation timestamp
    pub date: DateTime<Utc>,
}

/// Blog creation data, before the store assigns `id` (and `date` if absent)
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: Option<DateTime<Utc>>,
}

impl NewBlog {
    pub fn new(title: String, content: String, author: String) -> Self {
        Self {
            title,
            content,
            author,
            date: None,
        }
    }

    /// Set an explicit creation date instead of the server clock
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Reject blogs with an empty title, content or author.
    pub fn ensure_complete(&self) -> AppResult<()> {
        if self.title.is_empty() || self.content.is_empty() || self.author.is_empty() {
            return Err(AppError::validation(MSG_ALL_FIELDS_REQUIRED));
        }
        Ok(())
    }

    /// Attach the assigned id, defaulting the date to now.
    pub fn into_blog(self, id: BlogId) -> Blog {
        Blog {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            date: self.date.unwrap_or_else(Utc::now),
        }
    }
}

/// Order blogs newest first.
pub fn sort_newest_first(blogs: &mut [Blog]) {
    blogs.sort_by(|a, b| b.date.cmp(&a.date));
}
