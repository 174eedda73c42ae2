//! Product resolution shared by details and checkout

use std::collections::HashMap;

use kernel::id::ProductId;

use crate::domain::cart_item::{CartItem, distinct_product_ids};
use crate::domain::ports::CatalogLookup;
use crate::domain::product::Product;
use crate::error::{CartError, CartResult};

/// Look up every distinct product of `items`, one call each, in order
///
/// The first failure aborts the whole resolution.
pub async fn resolve<L>(lookup: &L, items: &[CartItem]) -> CartResult<HashMap<ProductId, Product>>
where
    L: CatalogLookup + Sync,
{
    let mut products = HashMap::new();
    for id in distinct_product_ids(items) {
        let product = lookup.product(id).await.map_err(|e| {
            CartError::dependency(format!("failed to get product details for product {id}"), e)
        })?;
        products.insert(id, product);
    }
    Ok(products)
}

/// The product resolved for `id`; absence means the resolver was bypassed
pub fn resolved<'a>(
    products: &'a HashMap<ProductId, Product>,
    id: ProductId,
) -> CartResult<&'a Product> {
    products
        .get(&id)
        .ok_or_else(|| CartError::Internal(format!("product {id} was not resolved")))
}
