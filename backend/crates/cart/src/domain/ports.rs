//! Ports
//!
//! The cart store plus the two peer services the cart depends on.

use kernel::id::{ProductId, UserId};

use crate::domain::cart_item::{CartItem, NewCartItem};
use crate::domain::order::OrderDraft;
use crate::domain::product::Product;
use crate::error::{CartResult, RemoteError};

#[trait_variant::make(CartRepository: Send)]
pub trait LocalCartRepository {
    /// Insert the line or add to the existing quantity, atomically
    async fn add_item(&self, item: &NewCartItem) -> CartResult<()>;

    /// All lines of a user ordered by id
    async fn items_for_user(&self, user_id: UserId) -> CartResult<Vec<CartItem>>;

    /// Remove one line; removing a missing line is not an error
    async fn delete_item(&self, user_id: UserId, product_id: ProductId) -> CartResult<()>;

    /// Remove every line of a user
    async fn clear(&self, user_id: UserId) -> CartResult<()>;
}

/// Read access to the product catalog
#[trait_variant::make(CatalogLookup: Send)]
pub trait LocalCatalogLookup {
    async fn product(&self, id: ProductId) -> Result<Product, RemoteError>;
}

/// Order creation on the order service
#[trait_variant::make(OrderSubmitter: Send)]
pub trait LocalOrderSubmitter {
    /// Succeeds only when the order service accepted the order
    async fn submit(&self, order: &OrderDraft) -> Result<(), RemoteError>;
}
