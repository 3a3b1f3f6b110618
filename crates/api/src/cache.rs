//! Time-based cache for remote query results.
//!
//! Entries are keyed by `(source, method, variables)` and considered fresh for
//! the configured stale time. Values are stored as JSON so one cache can hold
//! every result type.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};

/// Identifies one cached query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source: String,
    pub method: String,
    /// Variables serialized as JSON.
    pub variables: String,
}

impl CacheKey {
    pub fn new(source: &str, method: &str, variables: &impl Serialize) -> Self {
        Self {
            source: source.to_string(),
            method: method.to_string(),
            variables: serde_json::to_string(variables).unwrap_or_default(),
        }
    }

    /// Key for a query without variables.
    pub fn simple(source: &str, method: &str) -> Self {
        Self::new(source, method, &())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    stored_at: Instant,
}

/// Shared TTL cache. Cloning yields a handle to the same entries.
#[derive(Debug, Clone)]
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
    ttl: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// How long entries stay fresh.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// A fresh cached value for `key`, if any.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Store `value` under `key`.
    pub async fn insert<T: Serialize>(&self, key: CacheKey, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.entries.write().await.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
        Ok(())
    }

    /// Return the cached value for `key`, or run `fetch` and cache its result.
    ///
    /// Failed fetches are not cached. A zero TTL disables caching.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(value) = self.get(&key).await {
            tracing::trace!(source = %key.source, method = %key.method, "cache hit");
            return Ok(value);
        }

        tracing::trace!(source = %key.source, method = %key.method, "cache miss");
        let value = fetch().await?;
        if !self.ttl.is_zero() {
            self.insert(key, &value).await?;
        }
        Ok(value)
    }

    /// Drop one entry.
    pub async fn invalidate(&self, key: &CacheKey) {
        self.entries.write().await.remove(key);
    }

    /// Drop every entry matching `predicate`.
    pub async fn remove_where(&self, predicate: impl Fn(&CacheKey) -> bool) {
        self.entries.write().await.retain(|key, _| !predicate(key));
    }

    /// Drop every entry of one data source.
    pub async fn invalidate_source(&self, source: &str) {
        self.remove_where(|key| key.source == source).await;
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored entries, fresh or stale.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
