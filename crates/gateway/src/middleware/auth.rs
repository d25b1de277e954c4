//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use common::{AppError, AppResult};

use crate::state::AppState;

/// Caller identity taken from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub subject: String,
}

/// Authentication middleware that validates JWT tokens.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // Extract token from Authorization header
    let token = extract_token(request.headers())?;

    // Verify signature and expiry
    let claims = state.auth_service.verify_token(&token)?;
    tracing::debug!(subject = %claims.sub, "Bearer token accepted");

    // Insert current user into request extensions
    request.extensions_mut().insert(CurrentUser { subject: claims.sub });

    Ok(next.run(request).await)
}

/// Extract bearer token from Authorization header.
fn extract_token(headers: &HeaderMap) -> AppResult<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
        .ok_or(AppError::Unauthorized)
}
