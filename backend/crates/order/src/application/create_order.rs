//! Create Order Use Case
//!
//! Store insert, then two best-effort steps: publish the created event and
//! drop any cached entry under the new id. Neither can fail the call.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{ProductId, UserId};
use platform::cache::{self, CacheStore};

use crate::application::order_cache_key;
use crate::domain::event::OrderCreatedEvent;
use crate::domain::order::{NewOrder, Order};
use crate::domain::ports::{EventPublisher, OrderRepository};
use crate::error::OrderResult;

pub struct CreateOrderInput {
    pub user_id: UserId,
    pub product_ids: Vec<ProductId>,
    pub quantity: i32,
    pub total_price: f64,
    pub status: String,
}

pub struct CreateOrderUseCase<R, P, C>
where
    R: OrderRepository,
    P: EventPublisher,
    C: CacheStore,
{
    repo: Arc<R>,
    publisher: Arc<P>,
    cache: Arc<C>,
}

impl<R, P, C> CreateOrderUseCase<R, P, C>
where
    R: OrderRepository,
    P: EventPublisher + Sync,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, publisher: Arc<P>, cache: Arc<C>) -> Self {
        Self {
            repo,
            publisher,
            cache,
        }
    }

    pub async fn execute(&self, input: CreateOrderInput) -> OrderResult<Order> {
        let new_order = NewOrder::new(
            input.user_id,
            input.product_ids,
            input.quantity,
            input.total_price,
            &input.status,
        )?;
        let order = self.repo.create(&new_order).await?;

        tracing::info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total_price = order.total_price,
            "Order created"
        );

        let event = OrderCreatedEvent::from_order(&order, Utc::now());
        if let Err(e) = self.publisher.publish(&event).await {
            tracing::warn!(order_id = %order.id, error = %e, "OrderCreated event not published");
        }

        cache::invalidate(self.cache.as_ref(), &order_cache_key(order.id)).await;

        Ok(order)
    }
}
