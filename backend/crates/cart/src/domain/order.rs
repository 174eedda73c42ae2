//! Order submitted on checkout

use kernel::id::{ProductId, UserId};
use serde::Serialize;

pub const NEW_ORDER_STATUS: &str = "new";

/// Body posted to the order service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDraft {
    pub user_id: UserId,
    pub product_ids: Vec<ProductId>,
    pub quantity: i32,
    pub total_price: f64,
    pub status: String,
}
