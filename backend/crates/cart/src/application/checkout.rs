//! Checkout Use Case
//!
//! Prices the cart from the catalog, submits one order and clears the cart.
//! Submission and clearing are separate steps: when clearing fails after the
//! order was accepted, the order stands and the error is returned.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{ProductId, UserId};
use platform::cache::CacheStore;

use crate::application::{cart_cache, products};
use crate::domain::cart_item::{CartItem, distinct_product_ids};
use crate::domain::order::{NEW_ORDER_STATUS, OrderDraft};
use crate::domain::ports::{CartRepository, CatalogLookup, OrderSubmitter};
use crate::domain::product::Product;
use crate::error::{CartError, CartResult, RemoteError};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutput {
    pub order: OrderDraft,
}

pub struct CheckoutUseCase<R, L, O, C>
where
    R: CartRepository,
    L: CatalogLookup,
    O: OrderSubmitter,
    C: CacheStore,
{
    repo: Arc<R>,
    catalog: Arc<L>,
    orders: Arc<O>,
    cache: Arc<C>,
}

impl<R, L, O, C> CheckoutUseCase<R, L, O, C>
where
    R: CartRepository,
    L: CatalogLookup + Sync,
    O: OrderSubmitter + Sync,
    C: CacheStore + Sync,
{
    pub fn new(repo: Arc<R>, catalog: Arc<L>, orders: Arc<O>, cache: Arc<C>) -> Self {
        Self {
            repo,
            catalog,
            orders,
            cache,
        }
    }

    pub async fn execute(&self, user_id: UserId) -> CartResult<CheckoutOutput> {
        let items = self.repo.items_for_user(user_id).await?;
        if items.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let resolved = products::resolve(self.catalog.as_ref(), &items).await?;
        let order = draft_order(user_id, &items, &resolved)?;

        self.orders.submit(&order).await.map_err(|e| match e {
            RemoteError::Status { status, .. } => CartError::Upstream { status },
            other => CartError::dependency("failed to create order", other),
        })?;

        tracing::info!(
            user_id = %user_id,
            quantity = order.quantity,
            total_price = order.total_price,
            "Order submitted"
        );

        cart_cache::invalidate(self.cache.as_ref(), user_id).await;

        if let Err(e) = self.repo.clear(user_id).await {
            tracing::error!(
                user_id = %user_id,
                error = %e,
                "Order submitted but cart could not be cleared"
            );
            return Err(e);
        }

        Ok(CheckoutOutput { order })
    }
}

/// Totals over the cart lines; quantity overflow is a validation error
fn draft_order(
    user_id: UserId,
    items: &[CartItem],
    resolved: &HashMap<ProductId, Product>,
) -> CartResult<OrderDraft> {
    let mut total_price = 0.0;
    let mut quantity: i32 = 0;

    for item in items {
        let product = products::resolved(resolved, item.product_id)?;
        total_price += product.price * f64::from(item.quantity);
        quantity = quantity
            .checked_add(item.quantity)
            .ok_or_else(|| CartError::Validation("cart quantity is too large".to_string()))?;
    }

    Ok(OrderDraft {
        user_id,
        product_ids: distinct_product_ids(items),
        quantity,
        total_price,
        status: NEW_ORDER_STATUS.to_string(),
    })
}
