//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Admin Principal
// =============================================================================

/// Username of the single administrative principal
pub const ADMIN_USERNAME: &str = "admin";

/// Password of the single administrative principal
pub const ADMIN_PASSWORD: &str = "admin123";

/// Check if a token subject is the administrative principal
pub fn is_admin_subject(subject: &str) -> bool {
    subject == ADMIN_USERNAME
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Authentication
// =============================================================================

/// Default access token lifetime in minutes
pub const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 35;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Token type identifier returned on login
pub const TOKEN_TYPE_BEARER: &str = "bearer";

// =============================================================================
// Listing
// =============================================================================

/// First page number
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Records per page when the caller does not say
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Sort field applied when the caller does not say
pub const DEFAULT_SORT_FIELD: &str = "id";

// =============================================================================
// Seed Data
// =============================================================================

/// Records the registry holds on every start, as `(id, name, email)`
pub const SEED_USERS: &[(i64, &str, &str)] = &[
    (1, "Rethabile", "retha@gmail.com"),
    (2, "mosa", "mosa@gmail.com"),
];
