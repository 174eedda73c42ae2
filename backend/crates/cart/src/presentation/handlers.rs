//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use kernel::id::{ProductId, UserId};
use platform::cache::CacheStore;
use platform::extract::{JsonBody, PathParams};
use platform::identity::user_id_from_headers;

use crate::application::{
    AddItemUseCase, CartDetailsUseCase, CheckoutUseCase, ClearCartUseCase, DeleteItemUseCase,
    GetItemsUseCase,
};
use crate::domain::cart_item::CartItem;
use crate::domain::ports::{CartRepository, CatalogLookup, OrderSubmitter};
use crate::domain::product::CartItemDetail;
use crate::error::CartResult;
use crate::presentation::dto::AddItemRequest;

/// Shared state for cart handlers
pub struct CartAppState<R, L, O, C> {
    pub repo: Arc<R>,
    pub catalog: Arc<L>,
    pub orders: Arc<O>,
    pub cache: Arc<C>,
}

impl<R, L, O, C> Clone for CartAppState<R, L, O, C> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            catalog: self.catalog.clone(),
            orders: self.orders.clone(),
            cache: self.cache.clone(),
        }
    }
}

/// POST /cart
pub async fn add_item<R, L, O, C>(
    State(state): State<CartAppState<R, L, O, C>>,
    headers: HeaderMap,
    JsonBody(req): JsonBody<AddItemRequest>,
) -> CartResult<StatusCode>
where
    R: CartRepository + Send + Sync + 'static,
    L: CatalogLookup + Send + Sync + 'static,
    O: OrderSubmitter + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let user_id = if req.user_id.is_unset() {
        user_id_from_headers(&headers).unwrap_or_default()
    } else {
        req.user_id
    };

    AddItemUseCase::new(state.repo.clone(), state.cache.clone())
        .execute(user_id, req.product_id, req.quantity)
        .await?;

    Ok(StatusCode::CREATED)
}

/// GET /cart/{user_id}
pub async fn get_items<R, L, O, C>(
    State(state): State<CartAppState<R, L, O, C>>,
    PathParams(user_id): PathParams<UserId>,
) -> CartResult<Json<Vec<CartItem>>>
where
    R: CartRepository + Send + Sync + 'static,
    L: CatalogLookup + Send + Sync + 'static,
    O: OrderSubmitter + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = GetItemsUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute(user_id).await?))
}

/// GET /cart/{user_id}/details
pub async fn get_details<R, L, O, C>(
    State(state): State<CartAppState<R, L, O, C>>,
    PathParams(user_id): PathParams<UserId>,
) -> CartResult<Json<Vec<CartItemDetail>>>
where
    R: CartRepository + Send + Sync + 'static,
    L: CatalogLookup + Send + Sync + 'static,
    O: OrderSubmitter + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = CartDetailsUseCase::new(
        state.repo.clone(),
        state.catalog.clone(),
        state.cache.clone(),
    );
    Ok(Json(use_case.execute(user_id).await?))
}

/// DELETE /cart/{user_id}/{product_id}
pub async fn delete_item<R, L, O, C>(
    State(state): State<CartAppState<R, L, O, C>>,
    PathParams((user_id, product_id)): PathParams<(UserId, ProductId)>,
) -> CartResult<StatusCode>
where
    R: CartRepository + Send + Sync + 'static,
    L: CatalogLookup + Send + Sync + 'static,
    O: OrderSubmitter + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    DeleteItemUseCase::new(state.repo.clone(), state.cache.clone())
        .execute(user_id, product_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /cart/{user_id}/clear
pub async fn clear_cart<R, L, O, C>(
    State(state): State<CartAppState<R, L, O, C>>,
    PathParams(user_id): PathParams<UserId>,
) -> CartResult<StatusCode>
where
    R: CartRepository + Send + Sync + 'static,
    L: CatalogLookup + Send + Sync + 'static,
    O: OrderSubmitter + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    ClearCartUseCase::new(state.repo.clone(), state.cache.clone())
        .execute(user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /cart/{user_id}/checkout
pub async fn checkout<R, L, O, C>(
    State(state): State<CartAppState<R, L, O, C>>,
    PathParams(user_id): PathParams<UserId>,
) -> CartResult<StatusCode>
where
    R: CartRepository + Send + Sync + 'static,
    L: CatalogLookup + Send + Sync + 'static,
    O: OrderSubmitter + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    CheckoutUseCase::new(
        state.repo.clone(),
        state.catalog.clone(),
        state.orders.clone(),
        state.cache.clone(),
    )
    .execute(user_id)
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health() -> &'static str {
    "cart-service OK"
}
