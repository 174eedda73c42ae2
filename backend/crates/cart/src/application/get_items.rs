//! Get Items Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::cart_item::CartItem;
use crate::domain::ports::CartRepository;
use crate::error::CartResult;

/// Raw line items; no catalog calls, no cache
pub struct GetItemsUseCase<R>
where
    R: CartRepository,
{
    repo: Arc<R>,
}

impl<R> GetItemsUseCase<R>
where
    R: CartRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId) -> CartResult<Vec<CartItem>> {
        self.repo.items_for_user(user_id).await
    }
}
