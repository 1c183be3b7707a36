//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod blog;
pub mod password;
pub mod user;

pub use blog::{sort_newest_first, Blog, BlogId, NewBlog};
pub use password::Password;
pub use user::{institutional_email_message, is_institutional_email, User};
