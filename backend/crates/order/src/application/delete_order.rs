//! Delete Order Use Case

use std::sync::Arc;

use kernel::id::OrderId;
use platform::cache::{self, CacheStore};

use crate::application::order_cache_key;
use crate::domain::ports::OrderRepository;
use crate::error::OrderResult;

pub struct DeleteOrderUseCase<R, C>
where
    R: OrderRepository,
    C: CacheStore,
{
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> DeleteOrderUseCase<R, C>
where
    R: OrderRepository,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }

    pub async fn execute(&self, id: OrderId) -> OrderResult<()> {
        self.repo.delete(id).await?;
        cache::invalidate(self.cache.as_ref(), &order_cache_key(id)).await;

        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }
}
