use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Blog;

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Signup successful")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response to a successful add-blog, carrying the stored entity
#[derive(Debug, Serialize, ToSchema)]
pub struct BlogCreatedResponse {
    #[schema(example = "Blog added")]
    pub message: String,
    pub blog: Blog,
}

impl BlogCreatedResponse {
    pub fn new(message: impl Into<String>, blog: Blog) -> Self {
        Self {
            message: message.into(),
            blog,
        }
    }
}
