//! HTTP gateway library
//!
//! Exposes the token service and the user registry over a REST API.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create app state (hashes the admin credential, seeds the registry)
    let state = AppState::from_config(&config)?;

    // Build router
    let app = create_router(state);

    // Run server
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("User registry listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
