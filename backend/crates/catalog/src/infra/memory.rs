//! In-memory product store for tests and local runs

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use kernel::id::ProductId;

use crate::domain::product::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
    next_id: AtomicUsize,
    lookups: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find_by_id` calls served by the store
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn products(&self) -> CatalogResult<std::sync::MutexGuard<'_, Vec<Product>>> {
        self.products
            .lock()
            .map_err(|_| CatalogError::Internal("product store lock poisoned".to_string()))
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &NewProduct) -> CatalogResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let now = Utc::now();
        let stored = Product {
            id: ProductId::new(id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.products()?.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let mut products = self.products()?.clone();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.products()?.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<()> {
        self.products()?.retain(|p| p.id != id);
        Ok(())
    }
}
