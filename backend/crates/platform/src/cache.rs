//! Side Cache
//!
//! String key/value cache with per-entry TTL, used cache-aside by the cart,
//! order and catalog services. The cache is advisory: the JSON helpers at the
//! bottom of this module swallow and log every failure so that a missing or
//! broken cache degrades to a miss, never to a failed request.
//!
//! Adapters:
//! - [`RedisCache`] connects lazily on first use and bounds every operation
//!   with a timeout.
//! - [`InMemoryCache`] keeps entries in process; used by tests and local runs.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::OnceCell;

/// Default bound on a single cache round trip
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend failure: {0}")]
    Backend(String),

    #[error("cache operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Side cache port
#[trait_variant::make(CacheStore: Send)]
pub trait LocalCacheStore {
    /// Read a value; `None` on miss or expiry
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write a value that expires after `ttl`
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Remove a key; removing an absent key succeeds
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

// ============================================================================
// Redis adapter
// ============================================================================

/// Redis-backed cache
///
/// Construction only parses the URL. The connection is established on the
/// first operation and retried on later operations until it succeeds, so a
/// Redis outage at startup never prevents a service from booting.
pub struct RedisCache {
    client: redis::Client,
    connection: OnceCell<ConnectionManager>,
    operation_timeout: Duration,
}

impl RedisCache {
    pub fn open(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url).map_err(|e| CacheError::Backend(e.to_string()))?;
        Ok(Self {
            client,
            connection: OnceCell::new(),
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        })
    }

    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    async fn connection(&self) -> Result<ConnectionManager, CacheError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                let manager = ConnectionManager::new(self.client.clone()).await?;
                tracing::info!("Connected to Redis");
                Ok::<_, redis::RedisError>(manager)
            })
            .await
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        Ok(manager.clone())
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, CacheError>>,
    {
        tokio::time::timeout(self.operation_timeout, operation)
            .await
            .map_err(|_| CacheError::Timeout(self.operation_timeout))?
    }
}

impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.bounded(async {
            let mut conn = self.connection().await?;
            let value: Option<String> = conn
                .get(key)
                .await
                .map_err(|e| CacheError::Backend(e.to_string()))?;
            Ok(value)
        })
        .await
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.bounded(async {
            let mut conn = self.connection().await?;
            let _: () = conn
                .set_ex(key, value, ttl.as_secs().max(1))
                .await
                .map_err(|e| CacheError::Backend(e.to_string()))?;
            Ok(())
        })
        .await
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.bounded(async {
            let mut conn = self.connection().await?;
            let _: () = conn
                .del(key)
                .await
                .map_err(|e| CacheError::Backend(e.to_string()))?;
            Ok(())
        })
        .await
    }
}

// ============================================================================
// In-memory adapter
// ============================================================================

/// Process-local cache with TTL expiry on read
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .map(|entries| entries.values().filter(|(_, expires)| *expires > now).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, (String, Instant)>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::Backend("in-memory cache lock poisoned".to_string()))
    }
}

impl CacheStore for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some((value, expires)) if *expires > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let expires = Instant::now() + ttl;
        self.lock()?.insert(key.to_string(), (value, expires));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// ============================================================================
// Best-effort JSON helpers
// ============================================================================

/// Read and decode a cached JSON value
///
/// Backend errors and undecodable payloads are logged and reported as a miss.
pub async fn read_json<C, T>(cache: &C, key: &str) -> Option<T>
where
    C: CacheStore + Sync,
    T: DeserializeOwned,
{
    match cache.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!(key, "cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed cache entry");
                None
            }
        },
        Ok(None) => {
            tracing::debug!(key, "cache miss");
            None
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Cache read failed, treating as miss");
            None
        }
    }
}

/// Encode and store a JSON value, logging any failure
pub async fn write_json<C, T>(cache: &C, key: &str, value: &T, ttl: Duration)
where
    C: CacheStore + Sync,
    T: Serialize + ?Sized,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "Cache payload could not be encoded");
            return;
        }
    };
    if let Err(e) = cache.set(key, raw, ttl).await {
        tracing::warn!(key, error = %e, "Cache write failed");
    }
}

/// Delete a key, logging any failure
pub async fn invalidate<C>(cache: &C, key: &str)
where
    C: CacheStore + Sync,
{
    if let Err(e) = cache.delete(key).await {
        tracing::warn!(key, error = %e, "Cache invalidation failed");
    }
}
