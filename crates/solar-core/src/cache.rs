//! Compute-once cache keyed by project.
//!
//! Each key owns a `OnceCell`; the map shard is only locked long enough to
//! fetch or insert that cell, never across an await. Concurrent first
//! accesses for one key run a single initialiser and all observe its value.
//! A failed initialiser leaves the cell empty so the next caller retries.

use dashmap::DashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Memoizing cache with no eviction
#[derive(Debug)]
pub struct MemoCache<K, V>
where
    K: Eq + Hash,
{
    cells: DashMap<K, Arc<OnceCell<V>>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self { cells: DashMap::new() }
    }

    /// Returns the stored value without computing anything
    pub fn get(&self, key: &K) -> Option<V> {
        self.cells.get(key).and_then(|cell| cell.get().cloned())
    }

    /// Returns the stored value, running `init` first if the key is empty
    pub async fn get_or_try_init<E, F, Fut>(&self, key: K, init: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cell = self.cells.entry(key).or_default().clone();
        cell.get_or_try_init(init).await.cloned()
    }

    /// Number of populated entries
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|entry| entry.value().initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
