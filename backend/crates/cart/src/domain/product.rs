//! Catalog projection
//!
//! The cart never stores products. It reads them from the catalog service and
//! passes them through to responses and the details cache.

use kernel::id::ProductId;
use serde::{Deserialize, Serialize};

/// Product as served by the catalog; timestamps are passed through verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A cart line joined with its product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemDetail {
    pub product: Product,
    pub quantity: i32,
}
