//! Repository Traits

use kernel::id::ProductId;

use crate::domain::product::{NewProduct, Product};
use crate::error::CatalogResult;

#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Insert and return the stored product
    async fn create(&self, product: &NewProduct) -> CatalogResult<Product>;

    /// All products ordered by id
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Delete; deleting a missing id is not an error
    async fn delete(&self, id: ProductId) -> CatalogResult<()>;
}
