use crate::error::Error;

/// Number of shards used when none is configured.
pub const DEFAULT_SHARD_COUNT: usize = 64;

/// Which hash function to use for shard assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFunction {
    /// Use ahash (default, fast and well-distributed).
    #[default]
    AHash,
    /// Use fxhash (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    FxHash,
}

/// Configuration for a ShardMap instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) shard_count: usize,
    pub(crate) hash_function: HashFunction,
    pub(crate) capacity: usize,
    pub(crate) seed: Option<u64>,
}

impl Config {
    /// Create a new config with defaults (64 shards, ahash, random seed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of shards. Must be a power of two and greater than 0.
    pub fn shard_count(mut self, count: usize) -> Result<Self, Error> {
        if count == 0 || !count.is_power_of_two() {
            return Err(Error::InvalidShardCount(count));
        }
        self.shard_count = count;
        Ok(self)
    }

    /// Set the hash function to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.hash_function = hash_fn;
        self
    }

    /// Set the expected total number of entries.
    ///
    /// The hint is divided evenly across shards when it exceeds the shard
    /// count; smaller hints leave shard tables unsized.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Fix the routing seed instead of drawing a random one.
    ///
    /// Two maps with the same seed, shard count and hash function route
    /// every key to the same shard index.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Table capacity each shard is allocated with.
    pub(crate) fn per_shard_capacity(&self) -> usize {
        if self.capacity > self.shard_count {
            self.capacity / self.shard_count
        } else {
            0
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shard_count: DEFAULT_SHARD_COUNT,
            hash_function: HashFunction::AHash,
            capacity: 0,
            seed: None,
        }
    }
}

/// Builder for creating a ShardMap with custom configuration.
pub struct ShardMapBuilder {
    config: Config,
}

impl ShardMapBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the number of shards. Must be a power of two and greater than 0.
    pub fn shard_count(mut self, count: usize) -> Result<Self, Error> {
        self.config = self.config.shard_count(count)?;
        Ok(self)
    }

    /// Set the hash function to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.config = self.config.hash_function(hash_fn);
        self
    }

    /// Set the expected total number of entries.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.capacity(capacity);
        self
    }

    /// Fix the routing seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.seed(seed);
        self
    }

    /// Build a ShardMap with the configured settings. Shard storage is
    /// allocated immediately.
    pub fn build<K, V>(self) -> Result<crate::ShardMap<K, V>, Error>
    where
        K: std::hash::Hash + Eq + Send + Sync,
        V: Send + Sync,
    {
        crate::ShardMap::with_config(self.config)
    }
}

impl Default for ShardMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_count_validation() {
        assert_eq!(
            Config::new().shard_count(0).unwrap_err(),
            Error::InvalidShardCount(0)
        );
        assert_eq!(
            Config::new().shard_count(12).unwrap_err(),
            Error::InvalidShardCount(12)
        );
        assert_eq!(Config::new().shard_count(1).unwrap().shard_count, 1);
        assert_eq!(Config::new().shard_count(128).unwrap().shard_count, 128);
    }

    #[test]
    fn test_per_shard_capacity() {
        let config = Config::new().shard_count(16).unwrap();
        assert_eq!(config.capacity(0).per_shard_capacity(), 0);
        assert_eq!(config.capacity(16).per_shard_capacity(), 0);
        assert_eq!(config.capacity(17).per_shard_capacity(), 1);
        assert_eq!(config.capacity(1600).per_shard_capacity(), 100);
    }
}
