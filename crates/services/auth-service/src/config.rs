//! Auth service configuration.

use std::env;

use common::{env_parse, ConfigError};
use domain::{DEFAULT_JWT_EXPIRATION_MINUTES, MIN_JWT_SECRET_LENGTH};

/// Signing secret used when `JWT_SECRET` is unset.
const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Auth service configuration.
#[derive(Clone)]
pub struct AuthServiceConfig {
    jwt_secret: String,
    /// Access token lifetime in minutes
    pub jwt_expiration_minutes: i64,
}

impl std::fmt::Debug for AuthServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}

impl AuthServiceConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    /// Fails if the secret is shorter than [`MIN_JWT_SECRET_LENGTH`] or the
    /// lifetime is not positive.
    pub fn new(
        jwt_secret: impl Into<String>,
        jwt_expiration_minutes: i64,
    ) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::TooShort {
                key: "JWT_SECRET",
                min: MIN_JWT_SECRET_LENGTH,
            });
        }
        if jwt_expiration_minutes <= 0 {
            return Err(ConfigError::NotPositive {
                key: "JWT_EXPIRATION_MINUTES",
                value: jwt_expiration_minutes.to_string(),
            });
        }

        Ok(Self {
            jwt_secret,
            jwt_expiration_minutes,
        })
    }

    /// Load configuration from `JWT_SECRET` and `JWT_EXPIRATION_MINUTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using insecure default for development");
            DEV_JWT_SECRET.to_string()
        });

        let jwt_expiration_minutes =
            env_parse("JWT_EXPIRATION_MINUTES").unwrap_or(DEFAULT_JWT_EXPIRATION_MINUTES);

        Self::new(jwt_secret, jwt_expiration_minutes)
    }

    /// Get JWT secret as bytes.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            jwt_expiration_minutes: DEFAULT_JWT_EXPIRATION_MINUTES,
        }
    }
}
