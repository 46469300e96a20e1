//! Process-wide query client.
//!
//! A keyed cache of JSON values that components read through context. The
//! client is created once per process and handed out by cloning the handle,
//! so every render of the shell sees the same instance.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

static SHARED: OnceLock<QueryClient> = OnceLock::new();

/// Cheaply clonable handle to a query cache.
#[derive(Debug, Clone, Default)]
pub struct QueryClient {
    cache: Arc<RwLock<HashMap<String, Value>>>,
}

impl QueryClient {
    /// A fresh, unshared client.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide client. Every call returns the same instance.
    pub fn shared() -> QueryClient {
        SHARED
            .get_or_init(|| {
                tracing::debug!("creating shared query client");
                QueryClient::new()
            })
            .clone()
    }

    /// Referential identity of two handles.
    pub fn ptr_eq(&self, other: &QueryClient) -> bool {
        Arc::ptr_eq(&self.cache, &other.cache)
    }

    /// Cached value for `key`, if any.
    pub fn get_query_data(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set_query_data(&self, key: &str, value: Value) -> Option<Value> {
        self.write().insert(key.to_string(), value)
    }

    /// Cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&self, key: &str, fetch: F) -> Value
    where
        F: FnOnce() -> Value,
    {
        if let Some(hit) = self.get_query_data(key) {
            return hit;
        }
        self.write().entry(key.to_string()).or_insert_with(fetch).clone()
    }

    /// Drop the cached value for `key`. Returns whether one existed.
    pub fn invalidate(&self, key: &str) -> bool {
        self.write().remove(key).is_some()
    }

    /// Drop every cached value.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Value>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Value>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}
