use std::sync::Arc;

use async_trait::async_trait;

use crate::heroes::domain::Hero;
use crate::heroes::store::HeroStore;
use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory hero collection keyed by id.
///
/// One shared/exclusive lock (inside [`MemoryMapStore`]) guards the whole
/// mapping. The registry lives for the process lifetime and is injected into
/// the router state at construction.
#[derive(Clone)]
pub struct HeroRegistry {
    store: Arc<MemoryMapStore<String, Hero>>,
}

impl HeroRegistry {
    /// Create an empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self { store: MemoryMapStore::new() })
    }

    /// Create a registry pre-populated with the given records (startup seed).
    pub fn with_seed(heroes: impl IntoIterator<Item = Hero>) -> Arc<Self> {
        Arc::new(Self {
            store: MemoryMapStore::with_entries(heroes.into_iter().map(|h| (h.id.clone(), h))),
        })
    }

    /// Snapshot of all current records, order unspecified.
    pub async fn list(&self) -> Vec<Hero> {
        self.store.list().await.into_iter().map(|(_, hero)| hero).collect()
    }

    /// Lookup by exact key.
    pub async fn get(&self, id: &str) -> Option<Hero> {
        self.store.get(&id.to_string()).await
    }

    /// Upsert the record under its id.
    pub async fn put(&self, hero: Hero) {
        self.store.insert(hero.id.clone(), hero).await;
    }

    /// Shared-access existence check.
    pub async fn contains(&self, id: &str) -> bool {
        self.store.contains_key(&id.to_string()).await
    }

    /// Remove the record; absent keys are a no-op.
    pub async fn delete(&self, id: &str) {
        self.store.remove(&id.to_string()).await;
    }
}

#[async_trait]
impl HeroStore for HeroRegistry {
    async fn list(&self) -> Vec<Hero> { self.list().await }
    async fn get(&self, id: &str) -> Option<Hero> { self.get(id).await }
    async fn put(&self, hero: Hero) { self.put(hero).await }
    async fn contains(&self, id: &str) -> bool { self.contains(id).await }
    async fn delete(&self, id: &str) { self.delete(id).await }
}
