//! Gateway Router

use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::get;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::identity::require_identity;
use crate::proxy;
use crate::routes;

#[derive(Clone)]
pub struct GatewayState {
    client: reqwest::Client,
    config: Arc<GatewayConfig>,
}

impl GatewayState {
    pub fn new(client: reqwest::Client, config: GatewayConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

/// `/health` is answered locally; everything else goes through the route table
pub fn gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(dispatch)
        .with_state(state)
}

async fn dispatch(
    State(state): State<GatewayState>,
    request: Request,
) -> Result<Response, GatewayError> {
    let path = request.uri().path();
    let route = routes::resolve(path).ok_or_else(|| GatewayError::NoRoute(path.to_string()))?;

    let identity = if route.protected {
        Some(require_identity(
            request.headers(),
            &state.config.token_keys,
        )?)
    } else {
        None
    };

    let base_url = route.upstream.base_url(&state.config.upstreams);
    proxy::forward(&state.client, base_url, request, identity).await
}

async fn health() -> &'static str {
    "gateway OK"
}
