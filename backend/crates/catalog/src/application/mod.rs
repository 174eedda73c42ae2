//! Application Layer
//!
//! Use cases for the product catalog.

use std::time::Duration;

use kernel::id::ProductId;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;

pub use create_product::{CreateProductInput, CreateProductUseCase};
pub use delete_product::DeleteProductUseCase;
pub use get_product::GetProductUseCase;
pub use list_products::ListProductsUseCase;

/// Lifetime of a cached product
pub const PRODUCT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// `product:<id>`
pub fn product_cache_key(id: ProductId) -> String {
    format!("product:{id}")
}
