//! Domain Layer

pub mod event;
pub mod order;
pub mod ports;
pub mod status;

pub use event::OrderCreatedEvent;
pub use order::{NewOrder, Order};
pub use ports::{EventPublisher, OrderRepository};
pub use status::OrderStatus;
