//! Clear Cart Use Case

use std::sync::Arc;

use kernel::id::UserId;
use platform::cache::CacheStore;

use crate::application::cart_cache;
use crate::domain::ports::CartRepository;
use crate::error::CartResult;

pub struct ClearCartUseCase<R, C>
where
    R: CartRepository,
    C: CacheStore,
{
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> ClearCartUseCase<R, C>
where
    R: CartRepository,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }

    pub async fn execute(&self, user_id: UserId) -> CartResult<()> {
        self.repo.clear(user_id).await?;
        cart_cache::invalidate(self.cache.as_ref(), user_id).await;

        tracing::info!(user_id = %user_id, "Cart cleared");
        Ok(())
    }
}
