//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Store;
use crate::services::{AuthService, BlogService, ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Signup / login
    pub auth_service: Arc<dyn AuthService>,
    /// Blog CRUD
    pub blog_service: Arc<dyn BlogService>,
    /// Backing store, used directly only for health checks
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Build the full service graph on top of one store.
    pub fn from_store(store: Arc<dyn Store>) -> Self {
        let services = Services::from_store(store.clone());

        Self {
            auth_service: services.auth(),
            blog_service: services.blogs(),
            store,
        }
    }
}
