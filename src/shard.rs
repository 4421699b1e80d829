use crate::stats::{ShardOps, ShardStats};
use hashbrown::HashMap;
use parking_lot::{RwLock, RwLockReadGuard};
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A single shard: a HashMap behind a read-write lock plus its entry count.
///
/// `len` is only written while the write lock is held, so it always matches
/// the table once the lock is released. Readers load it without locking.
pub(crate) struct Shard<K, V> {
    map: RwLock<HashMap<K, Arc<V>>>,
    len: AtomicUsize,
    stats: ShardStats,
}

impl<K, V> Shard<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::with_capacity(capacity)),
            len: AtomicUsize::new(0),
            stats: ShardStats::new(),
        }
    }

    /// Insert a key-value pair, returning the previous value if any.
    /// Overwrites leave the entry count unchanged.
    pub fn insert(&self, key: K, value: V) -> Option<Arc<V>> {
        let mut map = self.map.write();
        let result = map.insert(key, Arc::new(value));
        if result.is_none() {
            self.len.fetch_add(1, Ordering::Relaxed);
            self.stats.record_write();
        }
        result
    }

    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let map = self.map.read();
        let result = map.get(key).cloned();
        if result.is_some() {
            self.stats.record_read();
        }
        result
    }

    /// Remove a key, returning its value. Removing an absent key leaves the
    /// entry count unchanged.
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        let mut map = self.map.write();
        let result = map.remove(key);
        if result.is_some() {
            self.len.fetch_sub(1, Ordering::Relaxed);
            self.stats.record_remove();
        }
        result
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    /// Append this shard's keys to `out` under one read lock.
    pub fn collect_keys(&self, out: &mut Vec<K>)
    where
        K: Clone,
    {
        let map = self.map.read();
        out.extend(map.keys().cloned());
    }

    /// Drop every entry, keeping the table's allocation.
    pub fn reset(&self) {
        let mut map = self.map.write();
        map.clear();
        self.len.store(0, Ordering::Relaxed);
    }

    /// Replace the table with a fresh one of `capacity` slots, releasing
    /// the old allocation.
    pub fn clear(&self, capacity: usize) {
        let mut map = self.map.write();
        *map = HashMap::with_capacity(capacity);
        self.len.store(0, Ordering::Relaxed);
    }

    pub fn capacity(&self) -> usize {
        self.map.read().capacity()
    }

    pub fn stats(&self) -> ShardOps {
        self.stats.snapshot()
    }

    pub fn read_lock(&self) -> RwLockReadGuard<'_, HashMap<K, Arc<V>>> {
        self.map.read()
    }
}
