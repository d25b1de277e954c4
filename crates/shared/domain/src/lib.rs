//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the token service, the user registry and the
//! HTTP gateway.

pub mod constants;
pub mod error;
pub mod password;
pub mod query;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use query::{SortField, UserQuery};
pub use user::{User, UserCreate};
