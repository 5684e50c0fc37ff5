//! Gateway Library
//!
//! Main entry point for all client requests. Routes quiz API traffic to the
//! quiz service and serves two informational endpoints of its own.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::GatewayState;

/// Run the gateway with configuration from the environment.
pub async fn run_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig {
        host: host.to_string(),
        port,
        ..GatewayConfig::from_env()
    };

    let addr = config.server_addr();
    let state = GatewayState::new(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Gateway listening on {}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
