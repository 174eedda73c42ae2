//! Application Layer
//!
//! Use cases for orders.

use std::time::Duration;

use kernel::id::OrderId;

pub mod create_order;
pub mod delete_order;
pub mod get_order;
pub mod list_orders;

pub use create_order::{CreateOrderInput, CreateOrderUseCase};
pub use delete_order::DeleteOrderUseCase;
pub use get_order::GetOrderUseCase;
pub use list_orders::ListOrdersUseCase;

/// Lifetime of a cached order
pub const ORDER_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// `order:<id>`
pub fn order_cache_key(id: OrderId) -> String {
    format!("order:{id}")
}
