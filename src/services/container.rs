//! Service Container - centralized service access.

use std::sync::Arc;

use super::{AuthService, Authenticator, BlogManager, BlogService};
use crate::infra::Store;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get blog service
    fn blogs(&self) -> Arc<dyn BlogService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    blog_service: Arc<dyn BlogService>,
}

impl Services {
    /// Wire every service on top of a single store
    pub fn from_store(store: Arc<dyn Store>) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(store.clone())),
            blog_service: Arc::new(BlogManager::new(store)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn blogs(&self) -> Arc<dyn BlogService> {
        self.blog_service.clone()
    }
}
