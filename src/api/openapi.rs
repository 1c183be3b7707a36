//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, blog_handler};
use crate::domain::{Blog, BlogId};
use crate::types::{BlogCreatedResponse, MessageResponse};

/// OpenAPI documentation for the blog backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Blog API",
        version = "0.1.0",
        description = "Signup/login and blog CRUD over a JSON file or a database",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        auth_handler::signup,
        auth_handler::login,
        blog_handler::list_blogs,
        blog_handler::add_blog,
        blog_handler::delete_blog,
    ),
    components(
        schemas(
            Blog,
            BlogId,
            MessageResponse,
            BlogCreatedResponse,
            auth_handler::SignupRequest,
            auth_handler::LoginRequest,
            blog_handler::AddBlogRequest,
        )
    ),
    tags(
        (name = "Authentication", description = "Signup and login"),
        (name = "Blogs", description = "Blog listing, creation and deletion")
    )
)]
pub struct ApiDoc;
