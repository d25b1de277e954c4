//! Auth Service Library
//!
//! Issues and verifies the signed bearer tokens that gate the user registry.
//! Holds the static admin credential table; no state is kept between calls.

pub mod config;
pub mod service;

pub use config::AuthServiceConfig;
pub use service::{AuthService, Authenticator, Claims, CredentialStore, TokenResponse};
