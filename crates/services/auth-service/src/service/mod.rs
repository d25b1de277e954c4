//! Authentication service business logic.

mod auth_service;
mod credentials;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use credentials::CredentialStore;
