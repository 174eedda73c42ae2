//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_numeric_out_of_range;
use kernel::id::{CartItemId, ProductId, UserId};
use sqlx::PgPool;

use crate::domain::cart_item::{CartItem, NewCartItem, QUANTITY_TOO_LARGE};
use crate::domain::ports::CartRepository;
use crate::error::{CartError, CartResult};

/// PostgreSQL-backed cart store
#[derive(Clone)]
pub struct PgCartRepository {
    pool: PgPool,
}

impl PgCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CartRepository for PgCartRepository {
    async fn add_item(&self, item: &NewCartItem) -> CartResult<()> {
        sqlx::query(
            r#"
            INSERT INTO cart_items (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity,
                          updated_at = NOW()
            "#,
        )
        .bind(item.user_id.get())
        .bind(item.product_id.get())
        .bind(item.quantity)
        .execute(&self.pool)
        .await
        .map_err(upsert_error)?;

        Ok(())
    }

    async fn items_for_user(&self, user_id: UserId) -> CartResult<Vec<CartItem>> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r#"
            SELECT id, user_id, product_id, quantity, created_at, updated_at
            FROM cart_items
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CartItemRow::into_cart_item).collect())
    }

    async fn delete_item(&self, user_id: UserId, product_id: ProductId) -> CartResult<()> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
            .bind(user_id.get())
            .bind(product_id.get())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear(&self, user_id: UserId) -> CartResult<()> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id.get())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// The accumulated quantity overflowing `INTEGER` is the caller's problem
fn upsert_error(err: sqlx::Error) -> CartError {
    if is_numeric_out_of_range(&err) {
        CartError::Validation(QUANTITY_TOO_LARGE.to_string())
    } else {
        CartError::Database(err)
    }
}

#[derive(sqlx::FromRow)]
struct CartItemRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CartItemRow {
    fn into_cart_item(self) -> CartItem {
        CartItem {
            id: CartItemId::new(self.id),
            user_id: UserId::new(self.user_id),
            product_id: ProductId::new(self.product_id),
            quantity: self.quantity,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    /// Database error carrying only a SQLSTATE
    #[derive(Debug)]
    struct SqlState(&'static str);

    impl fmt::Display for SqlState {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "sqlstate {}", self.0)
        }
    }

    impl std::error::Error for SqlState {}

    impl DatabaseError for SqlState {
        fn message(&self) -> &str {
            "integer out of range"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    #[test]
    fn test_upsert_overflow_is_validation_error() {
        let err = upsert_error(sqlx::Error::Database(Box::new(SqlState("22003"))));
        match err {
            CartError::Validation(message) => assert_eq!(message, QUANTITY_TOO_LARGE),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_upsert_failures_stay_database_errors() {
        let err = upsert_error(sqlx::Error::Database(Box::new(SqlState("23503"))));
        assert!(matches!(err, CartError::Database(_)));

        assert!(matches!(
            upsert_error(sqlx::Error::PoolTimedOut),
            CartError::Database(_)
        ));
    }
}
