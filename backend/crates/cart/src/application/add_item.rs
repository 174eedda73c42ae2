//! Add Item Use Case

use std::sync::Arc;

use kernel::id::{ProductId, UserId};
use platform::cache::CacheStore;

use crate::application::cart_cache;
use crate::domain::cart_item::NewCartItem;
use crate::domain::ports::CartRepository;
use crate::error::CartResult;

pub struct AddItemUseCase<R, C>
where
    R: CartRepository,
    C: CacheStore,
{
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> AddItemUseCase<R, C>
where
    R: CartRepository,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }

    /// Adding a product already in the cart increases its quantity
    pub async fn execute(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> CartResult<()> {
        let item = NewCartItem::new(user_id, product_id, quantity)?;
        self.repo.add_item(&item).await?;
        cart_cache::invalidate(self.cache.as_ref(), user_id).await;

        tracing::info!(user_id = %user_id, product_id = %product_id, quantity, "Cart item added");
        Ok(())
    }
}
