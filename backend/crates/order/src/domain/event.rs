//! Order created event
//!
//! Published once per stored order, keyed by the order id.

use chrono::{DateTime, Utc};
use kernel::id::{OrderId, ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::order::Order;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub product_ids: Vec<ProductId>,
    pub quantity: i32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl OrderCreatedEvent {
    pub fn from_order(order: &Order, now: DateTime<Utc>) -> Self {
        Self {
            order_id: order.id,
            user_id: order.user_id,
            product_ids: order.product_ids.clone(),
            quantity: order.quantity,
            total_price: order.total_price,
            created_at: now,
        }
    }

    /// Record key: the order id in decimal
    pub fn key(&self) -> String {
        self.order_id.to_string()
    }
}
