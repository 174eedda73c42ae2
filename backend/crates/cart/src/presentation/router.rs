//! Cart Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use platform::cache::CacheStore;

use crate::domain::ports::{CartRepository, CatalogLookup, OrderSubmitter};
use crate::presentation::handlers::{self, CartAppState};

/// Create the cart router over a store, catalog, order service and cache
///
/// `/cart/{user_id}/clear` is a literal segment and wins over
/// `/cart/{user_id}/{product_id}`.
pub fn cart_router<R, L, O, C>(repo: R, catalog: L, orders: O, cache: C) -> Router
where
    R: CartRepository + Send + Sync + 'static,
    L: CatalogLookup + Send + Sync + 'static,
    O: OrderSubmitter + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let state = CartAppState {
        repo: Arc::new(repo),
        catalog: Arc::new(catalog),
        orders: Arc::new(orders),
        cache: Arc::new(cache),
    };

    Router::new()
        .route("/cart", post(handlers::add_item::<R, L, O, C>))
        .route("/cart/{user_id}", get(handlers::get_items::<R, L, O, C>))
        .route(
            "/cart/{user_id}/details",
            get(handlers::get_details::<R, L, O, C>),
        )
        .route(
            "/cart/{user_id}/clear",
            delete(handlers::clear_cart::<R, L, O, C>),
        )
        .route(
            "/cart/{user_id}/checkout",
            post(handlers::checkout::<R, L, O, C>),
        )
        .route(
            "/cart/{user_id}/{product_id}",
            delete(handlers::delete_item::<R, L, O, C>),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}
