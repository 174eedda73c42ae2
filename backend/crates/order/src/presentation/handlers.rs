//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::id::OrderId;
use platform::cache::CacheStore;
use platform::extract::{JsonBody, PathParams};

use crate::application::{
    CreateOrderInput, CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
};
use crate::domain::order::Order;
use crate::domain::ports::{EventPublisher, OrderRepository};
use crate::error::OrderResult;
use crate::presentation::dto::CreateOrderRequest;

/// Shared state for order handlers
pub struct OrderAppState<R, P, C> {
    pub repo: Arc<R>,
    pub publisher: Arc<P>,
    pub cache: Arc<C>,
}

impl<R, P, C> Clone for OrderAppState<R, P, C> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            publisher: self.publisher.clone(),
            cache: self.cache.clone(),
        }
    }
}

/// POST /orders
pub async fn create_order<R, P, C>(
    State(state): State<OrderAppState<R, P, C>>,
    JsonBody(req): JsonBody<CreateOrderRequest>,
) -> OrderResult<(StatusCode, Json<Order>)>
where
    R: OrderRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = CreateOrderUseCase::new(
        state.repo.clone(),
        state.publisher.clone(),
        state.cache.clone(),
    );
    let order = use_case
        .execute(CreateOrderInput {
            user_id: req.user_id,
            product_ids: req.product_ids,
            quantity: req.quantity,
            total_price: req.total_price,
            status: req.status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders
pub async fn list_orders<R, P, C>(
    State(state): State<OrderAppState<R, P, C>>,
) -> OrderResult<Json<Vec<Order>>>
where
    R: OrderRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = ListOrdersUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute().await?))
}

/// GET /orders/{id}
pub async fn get_order<R, P, C>(
    State(state): State<OrderAppState<R, P, C>>,
    PathParams(id): PathParams<OrderId>,
) -> OrderResult<Json<Order>>
where
    R: OrderRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = GetOrderUseCase::new(state.repo.clone(), state.cache.clone());
    Ok(Json(use_case.execute(id).await?))
}

/// DELETE /orders/{id}
pub async fn delete_order<R, P, C>(
    State(state): State<OrderAppState<R, P, C>>,
    PathParams(id): PathParams<OrderId>,
) -> OrderResult<StatusCode>
where
    R: OrderRepository + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    DeleteOrderUseCase::new(state.repo.clone(), state.cache.clone())
        .execute(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health() -> &'static str {
    "order-service OK"
}
