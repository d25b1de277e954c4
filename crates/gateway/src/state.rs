//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::{AuthService, Authenticator, CredentialStore};
use common::AppResult;
use user_service_lib::{MemoryStore, UserManager, UserService};

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create new app state from already-built services.
    pub fn new(auth_service: Arc<dyn AuthService>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            auth_service,
            user_service,
        }
    }

    /// Build the admin credential table, the token service and a seeded registry.
    pub fn from_config(config: &GatewayConfig) -> AppResult<Self> {
        let credentials = CredentialStore::admin()?;
        let auth_service = Arc::new(Authenticator::new(credentials, &config.auth));

        let user_repo = Arc::new(MemoryStore::seeded());
        let user_service = Arc::new(UserManager::new(user_repo));

        Ok(Self::new(auth_service, user_service))
    }
}
