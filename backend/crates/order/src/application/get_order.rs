//! Get Order Use Case

use std::sync::Arc;

use kernel::id::OrderId;
use platform::cache::{self, CacheStore};

use crate::application::{ORDER_CACHE_TTL, order_cache_key};
use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;
use crate::error::{OrderError, OrderResult};

/// Cache-aside read; a cached entry is trusted until it expires
pub struct GetOrderUseCase<R, C>
where
    R: OrderRepository,
    C: CacheStore,
{
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> GetOrderUseCase<R, C>
where
    R: OrderRepository,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }

    pub async fn execute(&self, id: OrderId) -> OrderResult<Order> {
        let key = order_cache_key(id);

        if let Some(order) = cache::read_json::<_, Order>(self.cache.as_ref(), &key).await {
            return Ok(order);
        }

        let order = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id))?;

        cache::write_json(self.cache.as_ref(), &key, &order, ORDER_CACHE_TTL).await;

        Ok(order)
    }
}
