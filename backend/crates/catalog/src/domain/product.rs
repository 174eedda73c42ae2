//! Product Entity

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// A catalog entry; price is in USD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A product not yet stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl NewProduct {
    /// Name must be non-blank; price finite and non-negative
    pub fn new(name: &str, description: &str, price: f64) -> CatalogResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("Product name cannot be empty".to_string()));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::Validation(
                "Product price must be a non-negative number".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            description: description.trim().to_string(),
            price,
        })
    }
}
