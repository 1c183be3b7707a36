//! Application services layer - Use cases and business logic.
//!
//! Services sit between the HTTP handlers and the Store and depend only
//! on the `Store` trait, never on a concrete backend.

mod auth_service;
mod blog_service;
pub mod container;

pub use auth_service::{AuthService, Authenticator};
pub use blog_service::{BlogManager, BlogService};
pub use container::{ServiceContainer, Services};
