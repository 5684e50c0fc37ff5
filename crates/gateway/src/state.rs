//! Gateway state shared across handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct GatewayState {
    /// Shared upstream HTTP client
    pub client: reqwest::Client,
    pub config: Arc<GatewayConfig>,
}

impl GatewayState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }
}
