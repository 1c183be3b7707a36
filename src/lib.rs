//! Campus Blog API - signup/login and blog CRUD over HTTP.
//!
//! The same routes run on top of either a single JSON file or a
//! SeaORM-managed database; the backend is chosen at startup.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, blogs, password hashing
//! - **services**: Signup/login and blog use cases
//! - **infra**: Store trait, file and database backends, migrations
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Serve from data/db.json
//! cargo run -- serve
//!
//! # Serve from PostgreSQL
//! DATABASE_URL=postgres://... cargo run -- serve --backend database
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, StorageBackend};
pub use domain::{Blog, BlogId, NewBlog, Password, User};
pub use errors::{AppError, AppResult};
pub use infra::{DbStore, FileStore, Store};
