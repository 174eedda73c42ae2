//! Delete Item Use Case

use std::sync::Arc;

use kernel::id::{ProductId, UserId};
use platform::cache::CacheStore;

use crate::application::cart_cache;
use crate::domain::ports::CartRepository;
use crate::error::CartResult;

pub struct DeleteItemUseCase<R, C>
where
    R: CartRepository,
    C: CacheStore,
{
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> DeleteItemUseCase<R, C>
where
    R: CartRepository,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }

    pub async fn execute(&self, user_id: UserId, product_id: ProductId) -> CartResult<()> {
        self.repo.delete_item(user_id, product_id).await?;
        cart_cache::invalidate(self.cache.as_ref(), user_id).await;

        tracing::info!(user_id = %user_id, product_id = %product_id, "Cart item removed");
        Ok(())
    }
}
