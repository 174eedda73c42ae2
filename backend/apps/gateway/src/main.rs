//! API Gateway Entry Point
//!
//! Single public entry point. Verifies bearer tokens on protected routes and
//! forwards requests to the owning service with a trusted `X-User-ID`.

mod config;
mod error;
mod identity;
mod proxy;
mod router;
mod routes;

#[cfg(test)]
mod tests;

use platform::telemetry;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::router::{GatewayState, gateway_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("gateway=info,platform=info,tower_http=info");

    let config = GatewayConfig::from_env()?;
    let addr = platform::config::listen_addr(config::DEFAULT_PORT)?;
    let client = platform::http::build_client(config.timeout)?;

    tracing::info!(
        users = %config.upstreams.users,
        products = %config.upstreams.products,
        cart = %config.upstreams.cart,
        orders = %config.upstreams.orders,
        "Upstreams configured"
    );

    let app = telemetry::instrument(gateway_router(GatewayState::new(client, config)));

    tracing::info!("gateway listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
