//! API DTOs

use kernel::id::{ProductId, UserId};
use serde::Deserialize;

/// Create order request; `id` and timestamps in the body are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub status: String,
}
