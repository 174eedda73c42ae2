//! API DTOs

use serde::Deserialize;

/// Create product request; `id` and timestamps in the body are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}
