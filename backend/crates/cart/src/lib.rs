//! Cart Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Cart line items, the catalog projection and the outbound ports
//! - `application/` - Add/remove/clear/list, priced details and checkout
//! - `infra/` - PostgreSQL store, HTTP catalog and order clients, in-memory fakes
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Consistency Model
//! Products are owned by the catalog service and fetched on demand. Checkout
//! submits an order and then clears the cart as two independent steps; a
//! failure in between leaves the order in place and the cart untouched.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


pub use error::{CartError, CartResult, RemoteError};
pub use infra::http::{HttpCatalogLookup, HttpOrderSubmitter};
pub use infra::postgres::PgCartRepository;
pub use presentation::router::cart_router;
