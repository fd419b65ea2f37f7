use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

/// Generic in-memory key-value map store.
///
/// Wraps a `HashMap<K, V>` behind a single reader-writer lock and provides
/// simple CRUD helpers. Reads (`list`, `get`, `contains_key`) take shared
/// access and may run concurrently; writes (`insert`, `remove`) take
/// exclusive access and block everything else for their duration. There is
/// no per-key locking, and no operation holds the lock across I/O.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty store.
    pub fn new() -> Arc<Self> {
        Self::with_entries(std::iter::empty())
    }

    /// Create a store pre-populated with the given entries.
    pub fn with_entries(entries: impl IntoIterator<Item = (K, V)>) -> Arc<Self> {
        let map: HashMap<K, V> = entries.into_iter().collect();
        Arc::new(Self { inner: Arc::new(RwLock::new(map)) })
    }

    /// List all entries as `(key, value)` pairs. The copy completes before
    /// the lock is released, so concurrent writers never mutate a snapshot
    /// mid-read.
    pub async fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or update a value by key.
    pub async fn insert(&self, key: K, value: V) {
        let mut map = self.inner.write().await;
        map.insert(key, value);
    }

    /// Remove a key; returns whether it existed.
    pub async fn remove(&self, key: &K) -> bool {
        let mut map = self.inner.write().await;
        map.remove(key).is_some()
    }

    /// Check whether the key is present.
    pub async fn contains_key(&self, key: &K) -> bool {
        let map = self.inner.read().await;
        map.contains_key(key)
    }
}
