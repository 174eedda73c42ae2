//! Application Layer
//!
//! Use cases for the shopping cart.

pub mod add_item;
pub mod cart_cache;
pub mod cart_details;
pub mod checkout;
pub mod clear_cart;
pub mod delete_item;
pub mod get_items;
pub mod products;

pub use add_item::AddItemUseCase;
pub use cart_details::CartDetailsUseCase;
pub use checkout::{CheckoutOutput, CheckoutUseCase};
pub use clear_cart::ClearCartUseCase;
pub use delete_item::DeleteItemUseCase;
pub use get_items::GetItemsUseCase;
