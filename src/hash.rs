use crate::config::HashFunction;
use std::hash::{BuildHasher, Hash};
#[cfg(feature = "fxhash")]
use std::hash::Hasher;

// Odd constants used to spread one 64-bit seed over ahash's four keys.
const SEED_MIX: [u64; 3] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
];

/// Seeded hash function used for shard assignment.
///
/// The seed is fixed for the lifetime of a map, so a key always routes to
/// the same shard.
pub(crate) enum ShardHasher {
    /// AHash keyed from the map seed.
    AHash(ahash::RandomState),
    /// FxHash with the seed fed in ahead of the key.
    #[cfg(feature = "fxhash")]
    FxHash(u64),
}

impl ShardHasher {
    pub(crate) fn new(function: HashFunction, seed: u64) -> Self {
        match function {
            HashFunction::AHash => ShardHasher::AHash(ahash::RandomState::with_seeds(
                seed,
                seed.rotate_left(17) ^ SEED_MIX[0],
                seed.rotate_left(31) ^ SEED_MIX[1],
                seed.rotate_left(47) ^ SEED_MIX[2],
            )),
            #[cfg(feature = "fxhash")]
            HashFunction::FxHash => ShardHasher::FxHash(seed),
        }
    }

    /// Hash a key to determine which shard it belongs to.
    #[inline]
    pub(crate) fn hash_key<K: Hash + ?Sized>(&self, key: &K) -> u64 {
        match self {
            ShardHasher::AHash(state) => BuildHasher::hash_one(state, key),
            #[cfg(feature = "fxhash")]
            ShardHasher::FxHash(seed) => {
                let mut hasher = fxhash::FxHasher::default();
                hasher.write_u64(*seed);
                key.hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}
