//! Order Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use platform::cache::CacheStore;

use crate::domain::ports::{EventPublisher, OrderRepository};
use crate::presentation::handlers::{self, OrderAppState};

/// Create the order router for any store, publisher and cache
pub fn order_router<R, P, C>(repo: R, publisher: P, cache: C) -> Router
where
    R: OrderRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let state = OrderAppState {
        repo: Arc::new(repo),
        publisher: Arc::new(publisher),
        cache: Arc::new(cache),
    };

    Router::new()
        .route(
            "/orders",
            post(handlers::create_order::<R, P, C>).get(handlers::list_orders::<R, P, C>),
        )
        .route(
            "/orders/{id}",
            get(handlers::get_order::<R, P, C>).delete(handlers::delete_order::<R, P, C>),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}
