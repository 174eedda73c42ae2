//! Catalog Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use platform::cache::CacheStore;

use crate::domain::repository::ProductRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router for any store and cache implementation
pub fn catalog_router<R, C>(repo: R, cache: C) -> Router
where
    R: ProductRepository + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
        cache: Arc::new(cache),
    };

    Router::new()
        .route(
            "/products",
            post(handlers::create_product::<R, C>).get(handlers::list_products::<R, C>),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product::<R, C>).delete(handlers::delete_product::<R, C>),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
}
