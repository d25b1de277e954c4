//! Health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use common::AppResult;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub users: usize,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check endpoint - reports registry size.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let users = state.user_service.user_count().await?;
    Ok(Json(HealthResponse {
        status: "healthy",
        users,
    }))
}
