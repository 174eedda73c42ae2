//! Cart details cache
//!
//! Holds the priced view of a cart (`CartItemDetail[]` as JSON). Every cart
//! mutation drops the entry so the next details read goes to the store.

use std::time::Duration;

use kernel::id::UserId;
use platform::cache::{self, CacheStore};

use crate::domain::product::CartItemDetail;

pub const CART_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// `cart:user:<id>`
pub fn cart_cache_key(user_id: UserId) -> String {
    format!("cart:user:{user_id}")
}

pub async fn read<C>(cache: &C, user_id: UserId) -> Option<Vec<CartItemDetail>>
where
    C: CacheStore + Sync,
{
    cache::read_json(cache, &cart_cache_key(user_id)).await
}

pub async fn write<C>(cache: &C, user_id: UserId, details: &[CartItemDetail])
where
    C: CacheStore + Sync,
{
    cache::write_json(cache, &cart_cache_key(user_id), details, CART_CACHE_TTL).await;
}

pub async fn invalidate<C>(cache: &C, user_id: UserId)
where
    C: CacheStore + Sync,
{
    cache::invalidate(cache, &cart_cache_key(user_id)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_cache_key() {
        assert_eq!(cart_cache_key(UserId::new(42)), "cart:user:42");
    }
}
