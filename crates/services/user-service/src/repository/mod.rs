//! Repository layer for registry storage.

mod user_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
pub use user_repository::{MemoryStore, UserRepository};
