//! Order Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Order entity, status, created event and ports
//! - `application/` - Create, list, get and delete use cases
//! - `infra/` - PostgreSQL store, event publishers, in-memory fakes
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Creating an order publishes one `OrderCreatedEvent`. Publishing is best
//! effort: a failed publish is logged and the order still stands.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

pub use error::{OrderError, OrderResult, PublishError};
#[cfg(feature = "kafka")]
pub use infra::events::KafkaEventPublisher;
pub use infra::events::{ConfiguredPublisher, TracingEventPublisher};
pub use infra::postgres::PgOrderRepository;
pub use presentation::router::order_router;
