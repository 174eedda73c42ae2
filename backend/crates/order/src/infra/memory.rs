//! In-memory adapters for tests and local runs

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use chrono::Utc;
use kernel::id::OrderId;

use crate::domain::event::OrderCreatedEvent;
use crate::domain::order::{NewOrder, Order};
use crate::domain::ports::{EventPublisher, OrderRepository};
use crate::error::{OrderError, OrderResult, PublishError};

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
    next_id: AtomicI64,
    lookups: AtomicUsize,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find_by_id` calls served by the store
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn orders(&self) -> OrderResult<std::sync::MutexGuard<'_, Vec<Order>>> {
        self.orders
            .lock()
            .map_err(|_| OrderError::Internal("order store lock poisoned".to_string()))
    }
}

impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &NewOrder) -> OrderResult<Order> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let stored = Order {
            id: OrderId::new(id),
            user_id: order.user_id,
            product_ids: order.product_ids.clone(),
            quantity: order.quantity,
            total_price: order.total_price,
            status: order.status.clone(),
            created_at: now,
            updated_at: now,
        };
        self.orders()?.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> OrderResult<Vec<Order>> {
        let mut orders = self.orders()?.clone();
        orders.sort_by_key(|o| o.id);
        Ok(orders)
    }

    async fn find_by_id(&self, id: OrderId) -> OrderResult<Option<Order>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.orders()?.iter().find(|o| o.id == id).cloned())
    }

    async fn delete(&self, id: OrderId) -> OrderResult<()> {
        self.orders()?.retain(|o| o.id != id);
        Ok(())
    }
}

/// Keeps every published event; can be switched to reject them
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<OrderCreatedEvent>>,
    failing: AtomicBool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let publisher = Self::default();
        publisher.failing.store(true, Ordering::SeqCst);
        publisher
    }

    pub fn events(&self) -> Vec<OrderCreatedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &OrderCreatedEvent) -> Result<(), PublishError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PublishError::Delivery("broker unavailable".to_string()));
        }
        self.events
            .lock()
            .map_err(|_| PublishError::Delivery("event log lock poisoned".to_string()))?
            .push(event.clone());
        Ok(())
    }
}
