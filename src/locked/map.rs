use hashbrown::HashMap;
use parking_lot::RwLock;
use std::hash::Hash;

/// Thread-safe map behind one read-write lock.
///
/// Simpler and smaller than [`ShardMap`](crate::ShardMap), equivalent to a
/// map with a single shard: every writer excludes every other operation.
///
/// # Example
///
/// ```rust
/// use stowage::LockedMap;
///
/// let map = LockedMap::new();
/// map.insert("go", 1);
/// assert_eq!(map.get(&"go"), Some(1));
/// ```
#[derive(Debug)]
pub struct LockedMap<K, V> {
    inner: RwLock<HashMap<K, V>>,
    initial_capacity: usize,
}

impl<K: Hash + Eq, V> LockedMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty map with room for about `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(HashMap::with_capacity(capacity)),
            initial_capacity: capacity,
        }
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    /// A clone of the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// Remove a key, returning its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy the keys out in unspecified order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.read().keys().cloned().collect()
    }

    /// Remove every entry, keeping the table.
    pub fn reset(&self) {
        self.inner.write().clear();
    }

    /// Remove every entry and reallocate at the initial capacity.
    pub fn clear(&self) {
        *self.inner.write() = HashMap::with_capacity(self.initial_capacity);
    }
}

impl<K: Hash + Eq, V> Default for LockedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
