//! Create Product Use Case

use std::sync::Arc;

use crate::domain::product::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
}

pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateProductInput) -> CatalogResult<Product> {
        let new_product = NewProduct::new(&input.name, &input.description, input.price)?;
        let product = self.repo.create(&new_product).await?;

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");

        Ok(product)
    }
}
