//! Cart Details Use Case
//!
//! Cache-aside read of the priced cart. On a miss the lines come from the
//! store and each distinct product from the catalog; the joined list is then
//! cached for [`CART_CACHE_TTL`](crate::application::cart_cache::CART_CACHE_TTL).

use std::sync::Arc;

use kernel::id::UserId;
use platform::cache::CacheStore;

use crate::application::{cart_cache, products};
use crate::domain::ports::{CartRepository, CatalogLookup};
use crate::domain::product::CartItemDetail;
use crate::error::CartResult;

pub struct CartDetailsUseCase<R, L, C>
where
    R: CartRepository,
    L: CatalogLookup,
    C: CacheStore,
{
    repo: Arc<R>,
    catalog: Arc<L>,
    cache: Arc<C>,
}

impl<R, L, C> CartDetailsUseCase<R, L, C>
where
    R: CartRepository,
    L: CatalogLookup + Sync,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, catalog: Arc<L>, cache: Arc<C>) -> Self {
        Self {
            repo,
            catalog,
            cache,
        }
    }

    pub async fn execute(&self, user_id: UserId) -> CartResult<Vec<CartItemDetail>> {
        if let Some(details) = cart_cache::read(self.cache.as_ref(), user_id).await {
            return Ok(details);
        }

        let items = self.repo.items_for_user(user_id).await?;
        let resolved = products::resolve(self.catalog.as_ref(), &items).await?;

        let details = items
            .iter()
            .map(|item| {
                Ok(CartItemDetail {
                    product: products::resolved(&resolved, item.product_id)?.clone(),
                    quantity: item.quantity,
                })
            })
            .collect::<CartResult<Vec<_>>>()?;

        cart_cache::write(self.cache.as_ref(), user_id, &details).await;

        Ok(details)
    }
}
