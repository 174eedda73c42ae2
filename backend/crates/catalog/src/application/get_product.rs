//! Get Product Use Case
//!
//! Cache-aside read: a well-formed cached entry is returned without touching
//! the store; otherwise the store is read and the result cached for
//! [`PRODUCT_CACHE_TTL`].

use std::sync::Arc;

use kernel::id::ProductId;
use platform::cache::{self, CacheStore};

use crate::application::{PRODUCT_CACHE_TTL, product_cache_key};
use crate::domain::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct GetProductUseCase<R, C>
where
    R: ProductRepository,
    C: CacheStore,
{
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> GetProductUseCase<R, C>
where
    R: ProductRepository,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }

    pub async fn execute(&self, id: ProductId) -> CatalogResult<Product> {
        let key = product_cache_key(id);

        if let Some(product) = cache::read_json::<_, Product>(self.cache.as_ref(), &key).await {
            return Ok(product);
        }

        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        cache::write_json(self.cache.as_ref(), &key, &product, PRODUCT_CACHE_TTL).await;

        Ok(product)
    }
}
