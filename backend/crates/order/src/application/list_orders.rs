//! List Orders Use Case

use std::sync::Arc;

use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;
use crate::error::OrderResult;

pub struct ListOrdersUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> ListOrdersUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> OrderResult<Vec<Order>> {
        self.repo.list().await
    }
}
