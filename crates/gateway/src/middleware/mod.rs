//! Middleware for bearer authentication.

mod auth;

pub use auth::{auth_middleware, CurrentUser};
