//! Domain Layer

pub mod product;
pub mod repository;

pub use product::{NewProduct, Product};
pub use repository::ProductRepository;
