use crate::config::Config;
use crate::error::Error;
use crate::hash::ShardHasher;
use crate::iter::SnapshotIter;
use crate::shard::Shard;
use crate::stats::{ShardOps, Stats};
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

/// Shard storage, created at most once per map.
struct Shards<K, V> {
    shards: Box<[Shard<K, V>]>,
    shard_mask: usize,
    hash: ShardHasher,
    seed: u64,
}

impl<K, V> Shards<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn allocate(config: &Config) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let per_shard = config.per_shard_capacity();
        log::debug!(
            "allocating {} shards with {} slots each",
            config.shard_count,
            per_shard
        );

        let shards = (0..config.shard_count)
            .map(|_| Shard::with_capacity(per_shard))
            .collect();

        Self {
            shards,
            shard_mask: config.shard_count - 1,
            hash: ShardHasher::new(config.hash_function, seed),
            seed,
        }
    }

    /// Figure out which shard this key belongs to.
    #[inline]
    fn shard_for(&self, key: &K) -> &Shard<K, V> {
        let hash = self.hash.hash_key(key);
        &self.shards[(hash as usize) & self.shard_mask]
    }
}

/// Concurrent map whose keyspace is split across independently locked shards.
///
/// Each shard is a `HashMap` behind its own read-write lock, so operations on
/// different shards never contend and reads on the same shard run in
/// parallel. Values are stored as `Arc<V>` and handed out without copying.
///
/// `ShardMap::default()` allocates nothing. Reads on such a map report an
/// empty map; the first write allocates the shards and draws the routing
/// seed exactly once, even when many threads race to it.
///
/// `len`, `keys`, `iter_snapshot` and `stats` visit shards one after
/// another without a global lock. Under concurrent writes they return a
/// best-effort snapshot: each shard is read consistently, but shards are
/// read at different instants.
///
/// # Example
///
/// ```rust
/// use stowage::ShardMap;
///
/// let map = ShardMap::new();
/// map.insert("key1", "value1");
///
/// if let Some(value) = map.get(&"key1") {
///     println!("Found: {}", *value);
/// }
/// ```
pub struct ShardMap<K, V> {
    config: Config,
    inner: OnceLock<Shards<K, V>>,
}

impl<K, V> ShardMap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    /// Create a new map with defaults (64 shards, ahash, random seed).
    pub fn new() -> Self {
        Self::allocated(Config::default())
    }

    /// Create a new map sized for about `capacity` entries in total.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stowage::ShardMap;
    ///
    /// let map: ShardMap<u64, u64> = ShardMap::with_capacity(4096);
    /// assert!(map.capacity() >= 4096);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::allocated(Config::default().capacity(capacity))
    }

    /// Create a new map with custom config.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        if config.shard_count == 0 || !config.shard_count.is_power_of_two() {
            return Err(Error::InvalidShardCount(config.shard_count));
        }
        Ok(Self::allocated(config))
    }

    fn allocated(config: Config) -> Self {
        let map = Self {
            config,
            inner: OnceLock::new(),
        };
        map.shards();
        map
    }

    /// Shard storage, allocating it if this is the first use.
    #[inline]
    fn shards(&self) -> &Shards<K, V> {
        self.inner.get_or_init(|| Shards::allocate(&self.config))
    }

    /// Insert a key-value pair. Returns the old value if the key existed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stowage::ShardMap;
    ///
    /// let map = ShardMap::new();
    /// assert!(map.insert("key", "value").is_none());
    /// assert_eq!(map.insert("key", "new_value").unwrap().as_ref(), &"value");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&self, key: K, value: V) -> Option<Arc<V>> {
        self.shards().shard_for(&key).insert(key, value)
    }

    /// Get a value by key. Returns an `Arc<V>` so you can share it without copying.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.inner.get()?.shard_for(key).get(key)
    }

    /// Remove a key-value pair, returning the value if it existed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stowage::ShardMap;
    ///
    /// let map = ShardMap::new();
    /// map.insert("key", "value");
    /// assert_eq!(map.remove(&"key").unwrap().as_ref(), &"value");
    /// assert!(map.remove(&"key").is_none());
    /// assert_eq!(map.len(), 0);
    /// ```
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        self.inner.get()?.shard_for(key).remove(key)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner
            .get()
            .is_some_and(|inner| inner.shard_for(key).contains_key(key))
    }

    /// Get the total number of entries across all shards.
    ///
    /// Shard counters are summed in order without a global lock, so the
    /// total is only exact when no writer is running.
    pub fn len(&self) -> usize {
        self.inner
            .get()
            .map_or(0, |inner| inner.shards.iter().map(Shard::len).sum())
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy every key into a vector.
    ///
    /// Each shard is copied under its read lock, one shard at a time. Keys
    /// written to a shard that has not been visited yet may or may not
    /// appear. The order is unspecified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stowage::ShardMap;
    ///
    /// let map = ShardMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// let mut keys = map.keys();
    /// keys.sort();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let Some(inner) = self.inner.get() else {
            return Vec::new();
        };
        let mut keys = Vec::with_capacity(self.len());
        for shard in inner.shards.iter() {
            shard.collect_keys(&mut keys);
        }
        keys
    }

    /// Remove every entry while keeping each shard's allocation.
    ///
    /// Allocates the shards if the map was never used.
    pub fn reset(&self) {
        let inner = self.shards();
        for shard in inner.shards.iter() {
            shard.reset();
        }
        log::trace!("reset {} shards", inner.shards.len());
    }

    /// Remove every entry and give each shard a fresh table sized by the
    /// capacity hint, releasing the old allocations.
    pub fn clear(&self) {
        let inner = self.shards();
        let per_shard = self.config.per_shard_capacity();
        for shard in inner.shards.iter() {
            shard.clear(per_shard);
        }
        log::trace!(
            "cleared {} shards to {} slots each",
            inner.shards.len(),
            per_shard
        );
    }

    /// Total table capacity across shards. `0` before the shards exist.
    pub fn capacity(&self) -> usize {
        self.inner
            .get()
            .map_or(0, |inner| inner.shards.iter().map(Shard::capacity).sum())
    }

    /// Number of shards. Fixed for the life of the map.
    pub fn shard_count(&self) -> usize {
        self.config.shard_count
    }

    /// Routing seed, or `None` if the shards have not been allocated yet.
    pub fn seed(&self) -> Option<u64> {
        self.inner.get().map(|inner| inner.seed)
    }

    /// Whether shard storage has been allocated.
    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Entry count of each shard, in shard order.
    pub fn shard_loads(&self) -> Vec<usize> {
        match self.inner.get() {
            Some(inner) => inner.shards.iter().map(Shard::len).collect(),
            None => vec![0; self.config.shard_count],
        }
    }

    /// Get detailed statistics about the map and its shards.
    pub fn stats(&self) -> Stats {
        let shard_sizes = self.shard_loads();
        let operations: Vec<ShardOps> = match self.inner.get() {
            Some(inner) => inner.shards.iter().map(Shard::stats).collect(),
            None => vec![ShardOps::default(); self.config.shard_count],
        };
        let size = shard_sizes.iter().sum();

        Stats {
            size,
            shard_sizes,
            operations,
        }
    }

    /// Create a snapshot-based iterator over all key-value pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stowage::ShardMap;
    ///
    /// let map = ShardMap::new();
    /// map.insert("key1", "value1");
    /// map.insert("key2", "value2");
    ///
    /// assert_eq!(map.iter_snapshot().count(), 2);
    /// ```
    pub fn iter_snapshot(&self) -> SnapshotIter<K, V>
    where
        K: Clone,
    {
        match self.inner.get() {
            Some(inner) => SnapshotIter::new(&inner.shards),
            None => SnapshotIter::new(&[]),
        }
    }
}

impl<K, V> Default for ShardMap<K, V> {
    /// An unallocated map. Shards are created on the first write.
    fn default() -> Self {
        Self {
            config: Config::default(),
            inner: OnceLock::new(),
        }
    }
}

impl<K, V> fmt::Debug for ShardMap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShardMap")
            .field("shard_count", &self.config.shard_count)
            .field("initialized", &self.is_initialized())
            .field("len", &self.len())
            .finish()
    }
}
