//! Delete Product Use Case

use std::sync::Arc;

use kernel::id::ProductId;
use platform::cache::{self, CacheStore};

use crate::application::product_cache_key;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

pub struct DeleteProductUseCase<R, C>
where
    R: ProductRepository,
    C: CacheStore,
{
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> DeleteProductUseCase<R, C>
where
    R: ProductRepository,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }

    /// Store delete, then best-effort invalidation
    pub async fn execute(&self, id: ProductId) -> CatalogResult<()> {
        self.repo.delete(id).await?;
        cache::invalidate(self.cache.as_ref(), &product_cache_key(id)).await;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
