//! Domain Layer

pub mod cart_item;
pub mod order;
pub mod ports;
pub mod product;

pub use cart_item::{CartItem, NewCartItem};
pub use order::OrderDraft;
pub use ports::{CartRepository, CatalogLookup, OrderSubmitter};
pub use product::{CartItemDetail, Product};
