//! Blog handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::null_as_empty;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MSG_BLOG_ADDED, MSG_BLOG_DELETED};
use crate::domain::{Blog, BlogId, NewBlog};
use crate::errors::AppResult;
use crate::types::{BlogCreatedResponse, MessageResponse};

/// Add blog request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddBlogRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "All fields required"))]
    #[schema(example = "Campus fest recap")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "All fields required"))]
    #[schema(example = "The cultural fest wrapped up on Sunday...")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "All fields required"))]
    #[schema(example = "Asha")]
    pub author: String,
}

/// The store stamps `date` with the server clock
impl From<AddBlogRequest> for NewBlog {
    fn from(req: AddBlogRequest) -> Self {
        NewBlog::new(req.title, req.content, req.author)
    }
}

/// Create blog routes
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs).post(add_blog))
        .route("/blogs/:id", delete(delete_blog))
}

/// List all blogs, newest first
#[utoipa::path(
    get,
    path = "/blogs",
    tag = "Blogs",
    responses(
        (status = 200, description = "All blogs ordered by date descending", body = [Blog])
    )
)]
pub async fn list_blogs(State(state): State<AppState>) -> AppResult<Json<Vec<Blog>>> {
    let blogs = state.blog_service.list_blogs().await?;
    Ok(Json(blogs))
}

/// Add a blog
#[utoipa::path(
    post,
    path = "/blogs",
    tag = "Blogs",
    request_body = AddBlogRequest,
    responses(
        (status = 200, description = "Blog added", body = BlogCreatedResponse),
        (status = 400, description = "All fields required")
    )
)]
pub async fn add_blog(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddBlogRequest>,
) -> AppResult<Json<BlogCreatedResponse>> {
    let blog = state.blog_service.add_blog(payload.into()).await?;
    Ok(Json(BlogCreatedResponse::new(MSG_BLOG_ADDED, blog)))
}

/// Delete a blog by id
#[utoipa::path(
    delete,
    path = "/blogs/{id}",
    tag = "Blogs",
    params(
        ("id" = String, Path, description = "Blog id (UUID or integer)")
    ),
    responses(
        (status = 200, description = "Blog deleted", body = MessageResponse),
        (status = 404, description = "Blog not found")
    )
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id: BlogId = id.parse()?;
    state.blog_service.delete_blog(id).await?;
    Ok(Json(MessageResponse::new(MSG_BLOG_DELETED)))
}
