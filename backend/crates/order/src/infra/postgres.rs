//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{OrderId, ProductId, UserId};
use sqlx::PgPool;

use crate::domain::order::{NewOrder, Order};
use crate::domain::ports::OrderRepository;
use crate::domain::status::OrderStatus;
use crate::error::OrderResult;

/// PostgreSQL-backed order store; product ids live in a `BIGINT[]` column
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &NewOrder) -> OrderResult<Order> {
        let product_ids: Vec<i64> = order.product_ids.iter().map(|id| id.get()).collect();

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (user_id, product_ids, quantity, total_price, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, product_ids, quantity, total_price, status, created_at, updated_at
            "#,
        )
        .bind(order.user_id.get())
        .bind(&product_ids)
        .bind(order.quantity)
        .bind(order.total_price)
        .bind(order.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_order())
    }

    async fn list(&self) -> OrderResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, product_ids, quantity, total_price, status, created_at, updated_at
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderRow::into_order).collect())
    }

    async fn find_by_id(&self, id: OrderId) -> OrderResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, product_ids, quantity, total_price, status, created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(OrderRow::into_order))
    }

    async fn delete(&self, id: OrderId) -> OrderResult<()> {
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    product_ids: Vec<i64>,
    quantity: i32,
    total_price: f64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Order {
        Order {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.user_id),
            product_ids: self.product_ids.into_iter().map(ProductId::new).collect(),
            quantity: self.quantity,
            total_price: self.total_price,
            status: OrderStatus::parse(&self.status),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
