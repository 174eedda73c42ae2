//! In-memory adapters for tests and local runs

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use chrono::Utc;
use kernel::id::{CartItemId, ProductId, UserId};

use crate::domain::cart_item::{CartItem, NewCartItem, QUANTITY_TOO_LARGE};
use crate::domain::order::OrderDraft;
use crate::domain::ports::{CartRepository, CatalogLookup, OrderSubmitter};
use crate::domain::product::Product;
use crate::error::{CartError, CartResult, RemoteError};

// ============================================================================
// Cart store
// ============================================================================

#[derive(Default)]
pub struct InMemoryCartRepository {
    items: Mutex<Vec<CartItem>>,
    next_id: AtomicI64,
    fail_clear: AtomicBool,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `clear` fail with a store error
    pub fn fail_clear(&self) {
        self.fail_clear.store(true, Ordering::SeqCst);
    }

    fn items(&self) -> CartResult<std::sync::MutexGuard<'_, Vec<CartItem>>> {
        self.items
            .lock()
            .map_err(|_| CartError::Internal("cart store lock poisoned".to_string()))
    }
}

impl CartRepository for InMemoryCartRepository {
    async fn add_item(&self, item: &NewCartItem) -> CartResult<()> {
        let mut items = self.items()?;
        let now = Utc::now();

        if let Some(line) = items
            .iter_mut()
            .find(|line| line.user_id == item.user_id && line.product_id == item.product_id)
        {
            line.quantity = line
                .quantity
                .checked_add(item.quantity)
                .ok_or_else(|| CartError::Validation(QUANTITY_TOO_LARGE.to_string()))?;
            line.updated_at = now;
            return Ok(());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        items.push(CartItem {
            id: CartItemId::new(id),
            user_id: item.user_id,
            product_id: item.product_id,
            quantity: item.quantity,
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }

    async fn items_for_user(&self, user_id: UserId) -> CartResult<Vec<CartItem>> {
        Ok(self
            .items()?
            .iter()
            .filter(|line| line.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_item(&self, user_id: UserId, product_id: ProductId) -> CartResult<()> {
        self.items()?
            .retain(|line| !(line.user_id == user_id && line.product_id == product_id));
        Ok(())
    }

    async fn clear(&self, user_id: UserId) -> CartResult<()> {
        if self.fail_clear.load(Ordering::SeqCst) {
            return Err(CartError::Internal("cart store unavailable".to_string()));
        }
        self.items()?.retain(|line| line.user_id != user_id);
        Ok(())
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Fixed product table with a lookup counter
#[derive(Default)]
pub struct InMemoryCatalog {
    products: Mutex<HashMap<ProductId, Product>>,
    unavailable: Mutex<HashSet<ProductId>>,
    lookups: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, id: i64, name: &str, price: f64) -> Self {
        if let Ok(mut products) = self.products.lock() {
            products.insert(
                ProductId::new(id),
                Product {
                    id: ProductId::new(id),
                    name: name.to_string(),
                    description: String::new(),
                    price,
                    created_at: None,
                    updated_at: None,
                },
            );
        }
        self
    }

    /// Make lookups of `id` fail at the transport level
    pub fn make_unavailable(&self, id: i64) {
        if let Ok(mut unavailable) = self.unavailable.lock() {
            unavailable.insert(ProductId::new(id));
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl CatalogLookup for InMemoryCatalog {
    async fn product(&self, id: ProductId) -> Result<Product, RemoteError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let unavailable = self
            .unavailable
            .lock()
            .map_err(|_| RemoteError::Transport("catalog lock poisoned".to_string()))?
            .contains(&id);
        if unavailable {
            return Err(RemoteError::Transport("connection refused".to_string()));
        }

        self.products
            .lock()
            .map_err(|_| RemoteError::Transport("catalog lock poisoned".to_string()))?
            .get(&id)
            .cloned()
            .ok_or(RemoteError::Status {
                service: "product-service",
                status: 404,
            })
    }
}

// ============================================================================
// Order service
// ============================================================================

/// Records submitted orders; answers with a configurable status
pub struct RecordingOrderSubmitter {
    submitted: Mutex<Vec<OrderDraft>>,
    status: u16,
}

impl Default for RecordingOrderSubmitter {
    fn default() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            status: 201,
        }
    }
}

impl RecordingOrderSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(status: u16) -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            status,
        }
    }

    pub fn submitted(&self) -> Vec<OrderDraft> {
        self.submitted
            .lock()
            .map(|orders| orders.clone())
            .unwrap_or_default()
    }
}

impl OrderSubmitter for RecordingOrderSubmitter {
    async fn submit(&self, order: &OrderDraft) -> Result<(), RemoteError> {
        if !matches!(self.status, 200 | 201) {
            return Err(RemoteError::Status {
                service: "order-service",
                status: self.status,
            });
        }
        self.submitted
            .lock()
            .map_err(|_| RemoteError::Transport("order log lock poisoned".to_string()))?
            .push(order.clone());
        Ok(())
    }
}
