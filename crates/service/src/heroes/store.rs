use async_trait::async_trait;

use super::domain::Hero;

/// Trait abstraction for hero storage.
///
/// Implementations arbitrate concurrent access with a shared/exclusive
/// discipline: `list`, `get` and `contains` take shared access, `put` and
/// `delete` take exclusive access. `put` is an upsert shared by create and
/// update. `contains` and a subsequent `put` are separate critical sections;
/// a delete racing between them can resurrect a removed key.
#[async_trait]
pub trait HeroStore: Send + Sync {
    /// Snapshot copy of all current records, order unspecified.
    async fn list(&self) -> Vec<Hero>;
    /// Lookup by exact key.
    async fn get(&self, id: &str) -> Option<Hero>;
    /// Insert or overwrite the record under its id.
    async fn put(&self, hero: Hero);
    /// Shared-access existence check.
    async fn contains(&self, id: &str) -> bool;
    /// Remove the record; deleting an absent key is a no-op.
    async fn delete(&self, id: &str);
}
