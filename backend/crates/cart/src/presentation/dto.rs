//! API DTOs

use kernel::id::{ProductId, UserId};
use serde::Deserialize;

/// Add item request
///
/// A missing or zero `user_id` is taken from the trusted identity header.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub product_id: ProductId,
    #[serde(default)]
    pub quantity: i32,
}
