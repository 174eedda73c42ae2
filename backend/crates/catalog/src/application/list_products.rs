//! List Products Use Case

use std::sync::Arc;

use crate::domain::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// Store passthrough, never cached
pub struct ListProductsUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> ListProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<Product>> {
        self.repo.list().await
    }
}
