//! Gateway configuration.

use auth_service_lib::AuthServiceConfig;
use common::{ConfigError, ServerConfig};

/// Gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Bind address
    pub server: ServerConfig,
    /// Token signing settings
    pub auth: AuthServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            auth: AuthServiceConfig::from_env()?,
        })
    }

    /// Override the bind address where given.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}
