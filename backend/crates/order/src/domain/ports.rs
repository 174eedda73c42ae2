//! Ports

use kernel::id::OrderId;

use crate::domain::event::OrderCreatedEvent;
use crate::domain::order::{NewOrder, Order};
use crate::error::{OrderResult, PublishError};

#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Insert; the store assigns id and timestamps
    async fn create(&self, order: &NewOrder) -> OrderResult<Order>;

    /// All orders ordered by id
    async fn list(&self) -> OrderResult<Vec<Order>>;

    async fn find_by_id(&self, id: OrderId) -> OrderResult<Option<Order>>;

    /// Delete; deleting a missing id is not an error
    async fn delete(&self, id: OrderId) -> OrderResult<()>;
}

/// Outbound event log
#[trait_variant::make(EventPublisher: Send)]
pub trait LocalEventPublisher {
    /// Resolves once the log accepted the record
    async fn publish(&self, event: &OrderCreatedEvent) -> Result<(), PublishError>;
}
