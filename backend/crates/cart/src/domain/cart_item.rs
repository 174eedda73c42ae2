//! Cart line item

use chrono::{DateTime, Utc};
use kernel::id::{CartItemId, ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};

/// One (user, product) line; quantity is always positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rejection when accumulating into an existing line would overflow
pub const QUANTITY_TOO_LARGE: &str = "quantity is too large";

/// Quantity to add to a user's line for a product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewCartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}

impl NewCartItem {
    pub fn new(user_id: UserId, product_id: ProductId, quantity: i32) -> CartResult<Self> {
        if user_id.is_unset() {
            return Err(CartError::Validation("user id must be set".to_string()));
        }
        if product_id.is_unset() {
            return Err(CartError::Validation("product id must be set".to_string()));
        }
        if quantity <= 0 {
            return Err(CartError::Validation("quantity must be positive".to_string()));
        }
        Ok(Self {
            user_id,
            product_id,
            quantity,
        })
    }
}

/// Product ids in first-seen order, without repeats
pub fn distinct_product_ids(items: &[CartItem]) -> Vec<ProductId> {
    let mut ids: Vec<ProductId> = Vec::with_capacity(items.len());
    for item in items {
        if !ids.contains(&item.product_id) {
            ids.push(item.product_id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64) -> CartItem {
        let now = Utc::now();
        CartItem {
            id: CartItemId::new(product_id),
            user_id: UserId::new(1),
            product_id: ProductId::new(product_id),
            quantity: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_new_cart_item_validation() {
        assert!(NewCartItem::new(UserId::new(1), ProductId::new(2), 3).is_ok());
        assert!(NewCartItem::new(UserId::new(0), ProductId::new(2), 3).is_err());
        assert!(NewCartItem::new(UserId::new(1), ProductId::new(0), 3).is_err());
        assert!(NewCartItem::new(UserId::new(1), ProductId::new(2), 0).is_err());
        assert!(NewCartItem::new(UserId::new(1), ProductId::new(2), -4).is_err());
    }

    #[test]
    fn test_distinct_product_ids_keeps_first_seen_order() {
        let items = vec![item(3), item(1), item(3), item(2), item(1)];
        let ids: Vec<i64> = distinct_product_ids(&items).iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
