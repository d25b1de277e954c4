//! Token service - password login and bearer token verification.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::TOKEN_TYPE_BEARER;

use super::credentials::CredentialStore;
use crate::config::AuthServiceConfig;

/// Signing algorithm for every issued token
const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username the token was issued to)
    pub sub: String,
    /// Expiry as a Unix timestamp
    pub exp: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TokenResponse {
    /// Signed JWT access token
    pub access_token: String,
    /// Token type (always "bearer")
    #[cfg_attr(feature = "openapi", schema(example = "bearer"))]
    pub token_type: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange a username/password pair for a signed token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a token's signature and expiry and return its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// HS256 implementation of [`AuthService`] backed by a static credential table.
pub struct Authenticator {
    credentials: CredentialStore,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    jwt_expiration_minutes: i64,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(credentials: CredentialStore, config: &AuthServiceConfig) -> Self {
        Self {
            credentials,
            encoding_key: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret_bytes()),
            jwt_expiration_minutes: config.jwt_expiration_minutes,
        }
    }

    /// Sign a token for `subject` expiring after the configured lifetime
    fn generate_token(&self, subject: &str) -> AppResult<TokenResponse> {
        let expires_at = Utc::now() + Duration::minutes(self.jwt_expiration_minutes);

        let claims = Claims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding_key)?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        })
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        if !self.credentials.verify(&username, &password) {
            warn!(username = %username, "Login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.generate_token(&username)?;
        info!(username = %username, "Token issued");
        Ok(token)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Self::validation())?;
        Ok(token_data.claims)
    }
}
