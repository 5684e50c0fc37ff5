//! Gateway configuration.

use std::env;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Quiz service base URL
    pub quiz_service_url: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            quiz_service_url: env::var("QUIZ_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            quiz_service_url: "http://localhost:8081".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}
