//! Catalog (Product) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity and repository trait
//! - `application/` - Create, list, get and delete use cases
//! - `infra/` - PostgreSQL and in-memory product stores
//! - `presentation/` - HTTP handlers and router
//!
//! Single-product reads are served cache-aside under `product:<id>`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


pub use error::{CatalogError, CatalogResult};
pub use infra::memory::InMemoryProductRepository;
pub use infra::postgres::PgProductRepository;
pub use presentation::router::catalog_router;
