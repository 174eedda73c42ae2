//! Order Entity

use chrono::{DateTime, Utc};
use kernel::id::{OrderId, ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::status::OrderStatus;
use crate::error::{OrderError, OrderResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_ids: Vec<ProductId>,
    pub quantity: i32,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated order not yet stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub product_ids: Vec<ProductId>,
    pub quantity: i32,
    pub total_price: f64,
    pub status: OrderStatus,
}

impl NewOrder {
    pub fn new(
        user_id: UserId,
        product_ids: Vec<ProductId>,
        quantity: i32,
        total_price: f64,
        status: &str,
    ) -> OrderResult<Self> {
        if user_id.is_unset() {
            return Err(OrderError::Validation("user id must be set".to_string()));
        }
        if product_ids.is_empty() {
            return Err(OrderError::Validation("product ids can't be empty".to_string()));
        }
        if quantity <= 0 {
            return Err(OrderError::Validation("quantity must be positive".to_string()));
        }
        if !total_price.is_finite() || total_price < 0.0 {
            return Err(OrderError::Validation(
                "total price can't be negative".to_string(),
            ));
        }
        Ok(Self {
            user_id,
            product_ids,
            quantity,
            total_price,
            status: OrderStatus::parse(status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<ProductId> {
        raw.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn test_new_order_validation() {
        let user = UserId::new(1);
        assert!(NewOrder::new(user, ids(&[1]), 1, 0.0, "").is_ok());
        assert!(NewOrder::new(UserId::new(0), ids(&[1]), 1, 1.0, "").is_err());
        assert!(NewOrder::new(user, ids(&[]), 1, 1.0, "").is_err());
        assert!(NewOrder::new(user, ids(&[1]), 0, 1.0, "").is_err());
        assert!(NewOrder::new(user, ids(&[1]), 1, -0.5, "").is_err());
        assert!(NewOrder::new(user, ids(&[1]), 1, f64::NAN, "").is_err());
    }

    #[test]
    fn test_new_order_defaults_status() {
        let order = NewOrder::new(UserId::new(1), ids(&[1, 2]), 3, 9.0, "").unwrap();
        assert!(order.status.is_new());
    }
}
