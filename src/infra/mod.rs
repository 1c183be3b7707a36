//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Store implementations (JSON file, database)

pub mod db;
pub mod store;

pub use db::{Database, Migrator};
pub use store::{DbStore, FileStore, Store};

#[cfg(any(test, feature = "test-utils"))]
pub use store::MockStore;
