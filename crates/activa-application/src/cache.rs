//! Shared snapshot cache
//!
//! Process-wide memo tables (proxy synthesis, hook discovery) built on the
//! same copy-on-write scheme as the module indexes: lock-free reads, one
//! mutex serializing inserts. Values are computed outside the lock so that
//! a computation may itself consult the cache; when two callers race, the
//! first published value wins and both observe it.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use activa_domain::error::Result;
use arc_swap::ArcSwap;

pub struct SnapshotCache<K, V> {
    entries: ArcSwap<HashMap<K, V>>,
    write: Mutex<()>,
}

impl<K, V> SnapshotCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(HashMap::new()),
            write: Mutex::new(()),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.load().get(key).cloned()
    }

    /// Cached value for `key`, computing and publishing it on a miss
    ///
    /// Errors are returned to the caller and not cached.
    pub fn get_or_try_insert_with<F>(&self, key: K, create: F) -> Result<V>
    where
        F: FnOnce() -> Result<V>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = create()?;

        let _guard = self.write.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.entries.load_full();
        if let Some(existing) = current.get(&key) {
            return Ok(existing.clone());
        }
        let mut next = HashMap::clone(&current);
        next.insert(key, value.clone());
        self.entries.store(Arc::new(next));
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for SnapshotCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
