//! Domain-level errors.

use thiserror::Error;

/// Errors raised while building domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Plain-text password below the minimum length
    #[error("Password must be at least {min} characters")]
    WeakPassword { min: usize },

    /// Argon2 failed to hash or parse a hash
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
